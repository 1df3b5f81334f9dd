//! Validated tolerance pair and its built-in defaults.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CheckError, ErrorInfo};
use crate::settings;

/// Absolute tolerance used when neither the caller nor the settings override it.
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-4;
/// Relative tolerance used when neither the caller nor the settings override it.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-4;

/// Validated `(absolute, relative)` tolerance pair.
///
/// Both components are finite and non-negative. [`Tolerance::default`] yields
/// the process-wide defaults from [`settings::current`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTolerance")]
pub struct Tolerance {
    absolute: f64,
    relative: f64,
}

#[derive(Deserialize)]
struct RawTolerance {
    absolute: f64,
    relative: f64,
}

impl TryFrom<RawTolerance> for Tolerance {
    type Error = CheckError;

    fn try_from(raw: RawTolerance) -> Result<Self, Self::Error> {
        Tolerance::new(raw.absolute, raw.relative)
    }
}

impl Tolerance {
    /// Creates a tolerance, rejecting negative or non-finite components.
    pub fn new(absolute: f64, relative: f64) -> Result<Self, CheckError> {
        check_component("absolute", absolute)?;
        check_component("relative", relative)?;
        Ok(Self { absolute, relative })
    }

    pub(crate) const fn from_validated(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Zero tolerance; approximate comparison degenerates to exact equality.
    pub const fn exact() -> Self {
        Self::from_validated(0.0, 0.0)
    }

    /// Returns the absolute component.
    pub fn absolute(&self) -> f64 {
        self.absolute
    }

    /// Returns the relative component.
    pub fn relative(&self) -> f64 {
        self.relative
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        settings::current().tolerance()
    }
}

pub(crate) fn check_component(name: &str, value: f64) -> Result<(), CheckError> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    debug!(component = name, value, "rejected tolerance");
    Err(ErrorInfo::new(
        "invalid-tolerance",
        format!("{name} tolerance must be finite and non-negative"),
    )
    .with_context("component", name)
    .with_context("value", value)
    .into())
}
