//! Source locations attached to failures.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::panic::Location;

use serde::{Deserialize, Serialize};

/// File and line of the assertion that produced a signal.
///
/// The core never inspects the location; it only carries it into the failure
/// record. Callers that do not know their location use [`Default`], which
/// renders as `unknown:-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Source file name.
    pub file: Cow<'static, str>,
    /// Line number, `-1` when unknown.
    pub line: i64,
}

impl SourceLocation {
    /// Creates a location from a file name and line number.
    pub fn new(file: impl Into<Cow<'static, str>>, line: i64) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Captures the location of the caller.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new("unknown", -1)
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), i64::from(location.line()))
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
