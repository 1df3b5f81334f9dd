#![deny(missing_docs)]
#![doc = "Comparison predicates, tolerances and failure records for the numcheck assertion engine."]

pub mod errors;
pub mod location;
pub mod predicate;
pub mod settings;
mod tolerance;

pub use errors::{
    signal_kind, BoxError, CheckError, ErrorInfo, FailureDetail, MismatchRow, SequenceReport,
    SignalKind,
};
pub use location::SourceLocation;
pub use predicate::{almost_equal, AlmostEqualTo, AsF64, ElementPredicate, EqualTo};
pub use settings::Settings;
pub use tolerance::{Tolerance, DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE};
