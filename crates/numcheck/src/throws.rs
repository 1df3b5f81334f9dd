//! Expected-error checks and the known-failure marker.

use std::any::type_name;
use std::error::Error as StdError;

use numcheck_core::{BoxError, CheckError, FailureDetail, SourceLocation};
use tracing::debug;

use crate::signal::fail;

/// Evaluates `expression` and requires it to fail with an error of type `X`.
///
/// Only the absence of the expected error is turned into an assertion
/// failure. An error of any other type is returned unchanged.
pub fn assert_throws<X, T, F>(expression: F, location: &SourceLocation) -> Result<(), BoxError>
where
    X: StdError + 'static,
    F: FnOnce() -> Result<T, BoxError>,
{
    match expression() {
        Err(err) if err.is::<X>() => Ok(()),
        Err(err) => Err(err),
        Ok(_) => Err(Box::new(fail(FailureDetail::new(
            location.clone(),
            format!("did not throw {}", type_name::<X>()),
        )))),
    }
}

/// Builds the marker for an accepted, already understood failure.
pub fn known_failure(location: &SourceLocation) -> CheckError {
    debug!(location = %location, "known failure");
    CheckError::KnownFailure(location.clone())
}
