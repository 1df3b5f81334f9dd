//! Pairwise predicates answering "equal", "ordered" and "almost equal".
//!
//! Nothing here raises; every function returns a plain `bool`.

use std::ops::Neg;

use crate::tolerance::Tolerance;

/// Structural equality through the operands' own `PartialEq`.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    a == b
}

/// Returns whether `a <= b`.
pub fn ordered_le<A, B>(a: &A, b: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    a <= b
}

/// Returns whether `a >= b`.
pub fn ordered_ge<A, B>(a: &A, b: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    a >= b
}

/// Magnitude of `x` for any signed type whose `Default` is its zero.
pub fn abs<T>(x: T) -> T
where
    T: PartialOrd + Neg<Output = T> + Default,
{
    if x > T::default() {
        x
    } else {
        -x
    }
}

/// Hybrid absolute/relative closeness test.
///
/// `a` and `b` are close unless `|a - b| > relative * (|a| + |b|) + absolute`.
/// The bound is symmetric in `a` and `b`. Near zero it degrades to the
/// absolute test, at large magnitudes the relative term dominates. An infinite
/// operand only matches the same infinity. Any NaN operand makes the
/// comparison undecidable and it reports `true`.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn almost_equal(a: f64, b: f64, absolute_tolerance: f64, relative_tolerance: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b || a.is_nan() || b.is_nan();
    }
    let bound = relative_tolerance * (abs(a) + abs(b)) + absolute_tolerance;
    !(abs(a - b) > bound)
}

/// Lossy widening to `f64` used by approximate comparisons.
pub trait AsF64 {
    /// Returns the value widened to double precision.
    fn as_f64(&self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsF64 for $ty {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_as_f64!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: AsF64 + ?Sized> AsF64 for &T {
    fn as_f64(&self) -> f64 {
        (**self).as_f64()
    }
}

/// Element-wise predicate handed to the sequence comparator.
pub trait ElementPredicate<A: ?Sized, B: ?Sized> {
    /// Returns whether the pair satisfies the predicate.
    fn holds(&self, a: &A, b: &B) -> bool;
}

impl<A: ?Sized, B: ?Sized, F> ElementPredicate<A, B> for F
where
    F: Fn(&A, &B) -> bool,
{
    fn holds(&self, a: &A, b: &B) -> bool {
        self(a, b)
    }
}

/// Value-equality predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualTo;

impl<A, B> ElementPredicate<A, B> for EqualTo
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    fn holds(&self, a: &A, b: &B) -> bool {
        equal(a, b)
    }
}

/// Approximate-equality predicate closed over a fixed tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlmostEqualTo {
    tolerance: Tolerance,
}

impl AlmostEqualTo {
    /// Binds the predicate to `tolerance`.
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Returns the bound tolerance.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns whether `a` and `b` are almost equal under the bound tolerance.
    pub fn call(&self, a: f64, b: f64) -> bool {
        almost_equal(a, b, self.tolerance.absolute(), self.tolerance.relative())
    }
}

impl Default for AlmostEqualTo {
    fn default() -> Self {
        Self::new(Tolerance::default())
    }
}

impl<A, B> ElementPredicate<A, B> for AlmostEqualTo
where
    A: AsF64 + ?Sized,
    B: AsF64 + ?Sized,
{
    fn holds(&self, a: &A, b: &B) -> bool {
        self.call(a.as_f64(), b.as_f64())
    }
}
