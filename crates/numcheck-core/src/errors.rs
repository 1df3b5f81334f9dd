//! Structured failure records and the signal taxonomy shared by numcheck crates.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::SourceLocation;

/// Boxed error used where arbitrary error kinds must pass through unchanged.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Horizontal rule framing the rows of a sequence report.
pub const REPORT_RULE: &str = "--------------------------------";

/// One reported element-wise mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchRow {
    /// Position of the mismatch within the compared sequences.
    pub index: usize,
    /// Rendered element of the first sequence.
    pub value_a: String,
    /// Rendered element of the second sequence.
    pub value_b: String,
}

/// Outcome of an element-wise sequence comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceReport {
    /// Mismatch rows in traversal order, bounded by the output cap.
    pub rows: Vec<MismatchRow>,
    /// Total number of mismatching positions.
    pub mismatches: usize,
    /// Total number of positions compared.
    pub compared: usize,
}

impl SequenceReport {
    /// Returns whether every compared position satisfied the predicate.
    pub fn is_clean(&self) -> bool {
        self.mismatches == 0
    }

    /// Returns whether mismatches were dropped from `rows` by the output cap.
    pub fn truncated(&self) -> bool {
        self.mismatches > self.rows.len()
    }
}

/// Description of a failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    /// Location of the failing assertion.
    pub location: SourceLocation,
    /// Human readable headline.
    pub message: String,
    /// Type name of the first operand or of the sequence elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Mismatch listing for sequence comparisons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SequenceReport>,
}

impl FailureDetail {
    /// Creates a failure record with the provided location and headline.
    pub fn new(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            type_name: None,
            report: None,
        }
    }

    /// Records the operand type name.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Attaches a sequence mismatch report.
    pub fn with_report(mut self, report: SequenceReport) -> Self {
        self.report = Some(report);
        self
    }
}

impl Display for FailureDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.location, self.message)?;
        if let Some(type_name) = &self.type_name {
            write!(f, " [type='{type_name}']")?;
        }
        if let Some(report) = &self.report {
            writeln!(f)?;
            writeln!(f, "{REPORT_RULE}")?;
            for row in &report.rows {
                writeln!(f, "  [{}] {}  {}", row.index, row.value_a, row.value_b)?;
            }
            if report.truncated() {
                writeln!(f, "  (output limit reached)")?;
            }
            writeln!(f, "{REPORT_RULE}")?;
            write!(
                f,
                "Sequences differ at {} of {} positions",
                report.mismatches, report.compared
            )?;
        }
        Ok(())
    }
}

/// Structured payload for errors raised before any comparison work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Location of the assertion that could not proceed.
    #[serde(default)]
    pub location: SourceLocation,
    /// Contextual key value pairs (lengths, indices, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            location: SourceLocation::default(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Sets the location of the assertion that raised the error.
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (code: {})",
            self.location, self.message, self.code
        )?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Distinguishes the three signal kinds a collector must keep apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// A predicate evaluated false.
    Failure,
    /// A precondition the engine could not proceed past.
    Structural,
    /// A deliberately raised, already understood failure.
    KnownFailure,
}

/// Signal raised by every numcheck assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum CheckError {
    /// Assertion failure.
    #[error("{0}")]
    Failure(FailureDetail),
    /// Structural error raised before element-wise work.
    #[error("{0}")]
    Structural(ErrorInfo),
    /// Known-failure marker.
    #[error("[{0}] known failure")]
    KnownFailure(SourceLocation),
}

impl CheckError {
    /// Returns the signal kind of the error.
    pub fn kind(&self) -> SignalKind {
        match self {
            CheckError::Failure(_) => SignalKind::Failure,
            CheckError::Structural(_) => SignalKind::Structural,
            CheckError::KnownFailure(_) => SignalKind::KnownFailure,
        }
    }

    /// Returns the location carried by the error.
    pub fn location(&self) -> &SourceLocation {
        match self {
            CheckError::Failure(detail) => &detail.location,
            CheckError::Structural(info) => &info.location,
            CheckError::KnownFailure(location) => location,
        }
    }

    /// Returns the failure record when the error is an assertion failure.
    pub fn failure(&self) -> Option<&FailureDetail> {
        match self {
            CheckError::Failure(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<FailureDetail> for CheckError {
    fn from(detail: FailureDetail) -> Self {
        CheckError::Failure(detail)
    }
}

impl From<ErrorInfo> for CheckError {
    fn from(info: ErrorInfo) -> Self {
        CheckError::Structural(info)
    }
}

/// Classifies an arbitrary error, returning `None` for errors not raised by numcheck.
pub fn signal_kind(err: &(dyn StdError + 'static)) -> Option<SignalKind> {
    err.downcast_ref::<CheckError>().map(CheckError::kind)
}
