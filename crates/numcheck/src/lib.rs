#![deny(missing_docs)]
#![doc = "Scalar and sequence assertions for numeric validation, raising structured failures with bounded mismatch reports."]

pub mod containers;
mod macros;
pub mod scalar;
pub mod sequence;
mod signal;
pub mod throws;

pub use containers::{assert_almost_equal_containers, assert_equal_containers, HostSequence};
pub use scalar::{assert_almost_equal, assert_equal, assert_equal_quiet, assert_gequal, assert_lequal};
pub use sequence::{
    assert_almost_equal_ranges, assert_equal_ranges, assert_equal_ranges_by, compare_ranges,
};
pub use throws::{assert_throws, known_failure};

pub use numcheck_core::{
    predicate, settings, signal_kind, AlmostEqualTo, AsF64, BoxError, CheckError, ElementPredicate,
    EqualTo, ErrorInfo, FailureDetail, MismatchRow, SequenceReport, Settings, SignalKind,
    SourceLocation, Tolerance,
};
