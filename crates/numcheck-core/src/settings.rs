//! Process-wide defaults: tolerances and the mismatch row cap.
//!
//! Values are installed at most once, before the first read, and never change
//! afterwards.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CheckError, ErrorInfo};
use crate::tolerance::{
    check_component, Tolerance, DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE,
};

/// Default cap on mismatch rows listed in a sequence report.
pub const DEFAULT_MAX_OUTPUT_LINES: usize = 10;

static INSTALLED: OnceLock<Settings> = OnceLock::new();

fn settings_error(code: &str, message: impl Into<String>) -> CheckError {
    CheckError::Structural(ErrorInfo::new(code, message.into()))
}

/// Tunables read by every assertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum number of mismatch rows listed in a sequence report.
    #[serde(default = "Settings::default_max_output_lines")]
    pub max_output_lines: usize,
    /// Default absolute tolerance for approximate comparisons.
    #[serde(default = "Settings::default_absolute_tolerance")]
    pub absolute_tolerance: f64,
    /// Default relative tolerance for approximate comparisons.
    #[serde(default = "Settings::default_relative_tolerance")]
    pub relative_tolerance: f64,
}

impl Settings {
    const fn default_max_output_lines() -> usize {
        DEFAULT_MAX_OUTPUT_LINES
    }

    const fn default_absolute_tolerance() -> f64 {
        DEFAULT_ABSOLUTE_TOLERANCE
    }

    const fn default_relative_tolerance() -> f64 {
        DEFAULT_RELATIVE_TOLERANCE
    }

    /// Checks the tolerances and returns the settings unchanged when valid.
    pub fn validated(self) -> Result<Self, CheckError> {
        check_component("absolute", self.absolute_tolerance)?;
        check_component("relative", self.relative_tolerance)?;
        Ok(self)
    }

    /// Returns the default tolerance pair.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::from_validated(self.absolute_tolerance, self.relative_tolerance)
    }

    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CheckError> {
        let settings: Settings = serde_json::from_str(json).map_err(|err| {
            settings_error("settings-parse", format!("invalid settings document: {err}"))
        })?;
        settings.validated()
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| {
            CheckError::Structural(
                ErrorInfo::new("settings-io", format!("failed to read settings: {err}"))
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_output_lines: Self::default_max_output_lines(),
            absolute_tolerance: Self::default_absolute_tolerance(),
            relative_tolerance: Self::default_relative_tolerance(),
        }
    }
}

/// Installs process-wide settings.
///
/// Fails with `settings-locked` when settings were already installed or
/// already read through [`current`].
pub fn install(settings: Settings) -> Result<(), CheckError> {
    let settings = settings.validated()?;
    debug!(
        max_output_lines = settings.max_output_lines,
        absolute_tolerance = settings.absolute_tolerance,
        relative_tolerance = settings.relative_tolerance,
        "installing settings"
    );
    INSTALLED.set(settings).map_err(|_| {
        settings_error("settings-locked", "settings are fixed once installed or read")
    })
}

/// Returns the installed settings, fixing the defaults on first use.
pub fn current() -> &'static Settings {
    INSTALLED.get_or_init(Settings::default)
}
