//! Owned-container comparisons and the host adapter they rely on.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt::Debug;

use numcheck_core::{AsF64, CheckError, ErrorInfo, SourceLocation, Tolerance};

use crate::sequence::{assert_almost_equal_ranges, assert_equal_ranges};
use crate::signal::structural;

/// Length-bearing container that can be materialised as a host-resident slice.
///
/// Implementations for storage that does not live in host memory copy their
/// contents in [`HostSequence::to_host`]; host containers lend their slice.
pub trait HostSequence {
    /// Element type.
    type Item: Clone;

    /// Number of elements, available without materialising.
    fn len(&self) -> usize;

    /// Returns whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialises the contents as a host slice.
    fn to_host(&self) -> Cow<'_, [Self::Item]>;
}

impl<T: Clone> HostSequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn to_host(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }
}

impl<T: Clone, const N: usize> HostSequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn to_host(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Clone> HostSequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn to_host(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Clone> HostSequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn to_host(&self) -> Cow<'_, [T]> {
        match self.as_slices() {
            (front, []) => Cow::Borrowed(front),
            _ => Cow::Owned(self.iter().cloned().collect()),
        }
    }
}

fn check_sizes(len_a: usize, len_b: usize, location: &SourceLocation) -> Result<(), CheckError> {
    if len_a == len_b {
        return Ok(());
    }
    Err(structural(
        ErrorInfo::new("size-mismatch", "Sequences have different sizes")
            .at(location.clone())
            .with_context("len_a", len_a)
            .with_context("len_b", len_b),
    ))
}

/// Compares two containers for equality.
///
/// Differing lengths raise the `size-mismatch` structural error before either
/// container is materialised.
pub fn assert_equal_containers<A, B>(
    a: &A,
    b: &B,
    location: &SourceLocation,
) -> Result<(), CheckError>
where
    A: HostSequence + ?Sized,
    B: HostSequence + ?Sized,
    A::Item: PartialEq<B::Item> + Debug,
    B::Item: Debug,
{
    check_sizes(a.len(), b.len(), location)?;
    let (host_a, host_b) = (a.to_host(), b.to_host());
    assert_equal_ranges(host_a.iter(), host_b.iter(), location)
}

/// Compares two containers for approximate equality under `tolerance`.
///
/// Same size policy as [`assert_equal_containers`].
pub fn assert_almost_equal_containers<A, B>(
    a: &A,
    b: &B,
    location: &SourceLocation,
    tolerance: Tolerance,
) -> Result<(), CheckError>
where
    A: HostSequence + ?Sized,
    B: HostSequence + ?Sized,
    A::Item: AsF64 + Debug,
    B::Item: AsF64 + Debug,
{
    check_sizes(a.len(), b.len(), location)?;
    let (host_a, host_b) = (a.to_host(), b.to_host());
    assert_almost_equal_ranges(host_a.iter(), host_b.iter(), location, tolerance)
}
