//! Failure constructors shared by the assertion modules.

use std::any::type_name;

use numcheck_core::{CheckError, ErrorInfo, FailureDetail};
use tracing::debug;

pub(crate) fn fail(detail: FailureDetail) -> CheckError {
    debug!(
        location = %detail.location,
        message = %detail.message,
        mismatches = detail.report.as_ref().map(|report| report.mismatches),
        "assertion failed"
    );
    CheckError::Failure(detail)
}

pub(crate) fn structural(info: ErrorInfo) -> CheckError {
    debug!(location = %info.location, code = %info.code, "structural error");
    CheckError::Structural(info)
}

/// Type name with leading reference sigils removed, so `&f64` reads as `f64`.
pub(crate) fn element_type_name<T: ?Sized>() -> &'static str {
    type_name::<T>().trim_start_matches('&')
}
