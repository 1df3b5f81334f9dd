//! Assertions over a single pair of values.

use std::any::type_name;
use std::fmt::Debug;

use numcheck_core::predicate::{equal, ordered_ge, ordered_le};
use numcheck_core::{AlmostEqualTo, AsF64, CheckError, FailureDetail, SourceLocation, Tolerance};

use crate::signal::fail;

fn scalar_failure<A: ?Sized>(location: &SourceLocation, message: String) -> CheckError {
    fail(FailureDetail::new(location.clone(), message).with_type_name(type_name::<A>()))
}

/// Fails unless `a == b`; the message renders both values.
pub fn assert_equal<A, B>(a: &A, b: &B, location: &SourceLocation) -> Result<(), CheckError>
where
    A: PartialEq<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    if equal(a, b) {
        return Ok(());
    }
    Err(scalar_failure::<A>(
        location,
        format!("values are not equal: {a:?} {b:?}"),
    ))
}

/// Like [`assert_equal`] for values that cannot be rendered.
pub fn assert_equal_quiet<A, B>(a: &A, b: &B, location: &SourceLocation) -> Result<(), CheckError>
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    if equal(a, b) {
        return Ok(());
    }
    Err(scalar_failure::<A>(
        location,
        "values are not equal.".to_string(),
    ))
}

/// Fails unless `a <= b`.
pub fn assert_lequal<A, B>(a: &A, b: &B, location: &SourceLocation) -> Result<(), CheckError>
where
    A: PartialOrd<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    if ordered_le(a, b) {
        return Ok(());
    }
    Err(scalar_failure::<A>(
        location,
        format!("{a:?} is greater than {b:?}"),
    ))
}

/// Fails unless `a >= b`.
pub fn assert_gequal<A, B>(a: &A, b: &B, location: &SourceLocation) -> Result<(), CheckError>
where
    A: PartialOrd<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    if ordered_ge(a, b) {
        return Ok(());
    }
    Err(scalar_failure::<A>(
        location,
        format!("{a:?} is less than {b:?}"),
    ))
}

/// Fails unless `a` and `b`, widened to `f64`, are almost equal under `tolerance`.
///
/// Pass [`Tolerance::default`] for the process-wide defaults.
pub fn assert_almost_equal<A, B>(
    a: &A,
    b: &B,
    location: &SourceLocation,
    tolerance: Tolerance,
) -> Result<(), CheckError>
where
    A: AsF64 + ?Sized,
    B: AsF64 + ?Sized,
{
    let (a, b) = (a.as_f64(), b.as_f64());
    if AlmostEqualTo::new(tolerance).call(a, b) {
        return Ok(());
    }
    Err(scalar_failure::<A>(
        location,
        format!("values are not approximately equal: {a} {b}"),
    ))
}
