//! Element-wise comparison of two sequence views.
//!
//! Every form performs exactly one forward pass over each view. The first view
//! bounds the traversal; the second must be at least as long; trailing
//! elements of the second view are never read.

use std::fmt::Debug;

use numcheck_core::settings;
use numcheck_core::{
    AlmostEqualTo, AsF64, CheckError, ElementPredicate, EqualTo, ErrorInfo, FailureDetail,
    MismatchRow, SequenceReport, SourceLocation, Tolerance,
};

use crate::signal::{element_type_name, fail, structural};

/// Compares two views without raising on mismatches.
///
/// At most `max_rows` mismatch rows are recorded while every mismatch is
/// counted. The only error is `sequence-exhausted`, raised when `b` ends
/// before `a`.
pub fn compare_ranges<IA, IB, P>(
    a: IA,
    b: IB,
    predicate: &P,
    max_rows: usize,
    location: &SourceLocation,
) -> Result<SequenceReport, CheckError>
where
    IA: IntoIterator,
    IB: IntoIterator,
    IA::Item: Debug,
    IB::Item: Debug,
    P: ElementPredicate<IA::Item, IB::Item> + ?Sized,
{
    let mut report = SequenceReport::default();
    let mut rest_b = b.into_iter();
    for (index, value_a) in a.into_iter().enumerate() {
        let Some(value_b) = rest_b.next() else {
            return Err(structural(
                ErrorInfo::new(
                    "sequence-exhausted",
                    "second sequence ended before the first",
                )
                .at(location.clone())
                .with_context("index", index)
                .with_hint("the second sequence must be at least as long as the first"),
            ));
        };
        if !predicate.holds(&value_a, &value_b) {
            report.mismatches += 1;
            if report.mismatches <= max_rows {
                report.rows.push(MismatchRow {
                    index,
                    value_a: format!("{value_a:?}"),
                    value_b: format!("{value_b:?}"),
                });
            }
        }
        report.compared += 1;
    }
    Ok(report)
}

fn raise_mismatches<T: ?Sized>(
    report: SequenceReport,
    location: &SourceLocation,
) -> Result<(), CheckError> {
    if report.is_clean() {
        return Ok(());
    }
    Err(fail(
        FailureDetail::new(location.clone(), "Sequences are not equal")
            .with_type_name(element_type_name::<T>())
            .with_report(report),
    ))
}

fn assert_ranges_with<IA, IB, P>(
    a: IA,
    b: IB,
    predicate: &P,
    location: &SourceLocation,
) -> Result<(), CheckError>
where
    IA: IntoIterator,
    IB: IntoIterator,
    IA::Item: Debug,
    IB::Item: Debug,
    P: ElementPredicate<IA::Item, IB::Item> + ?Sized,
{
    let max_rows = settings::current().max_output_lines;
    let report = compare_ranges(a, b, predicate, max_rows, location)?;
    raise_mismatches::<IA::Item>(report, location)
}

/// Fails when `predicate` rejects any position, listing every mismatch up to the row cap.
pub fn assert_equal_ranges_by<IA, IB, F>(
    a: IA,
    b: IB,
    predicate: F,
    location: &SourceLocation,
) -> Result<(), CheckError>
where
    IA: IntoIterator,
    IB: IntoIterator,
    IA::Item: Debug,
    IB::Item: Debug,
    F: Fn(&IA::Item, &IB::Item) -> bool,
{
    assert_ranges_with(a, b, &predicate, location)
}

/// Element-wise [`assert_equal_ranges_by`] with value equality.
///
/// Both views must yield the same item form: `slice.iter()` yields references
/// and only compares against another borrowing view. Use `.copied()` or
/// `.cloned()` to compare a borrowing view against an owning one such as a
/// range.
pub fn assert_equal_ranges<IA, IB>(a: IA, b: IB, location: &SourceLocation) -> Result<(), CheckError>
where
    IA: IntoIterator,
    IB: IntoIterator,
    IA::Item: PartialEq<IB::Item> + Debug,
    IB::Item: Debug,
{
    assert_ranges_with(a, b, &EqualTo, location)
}

/// Element-wise [`assert_equal_ranges_by`] with approximate equality under `tolerance`.
pub fn assert_almost_equal_ranges<IA, IB>(
    a: IA,
    b: IB,
    location: &SourceLocation,
    tolerance: Tolerance,
) -> Result<(), CheckError>
where
    IA: IntoIterator,
    IB: IntoIterator,
    IA::Item: AsF64 + Debug,
    IB::Item: AsF64 + Debug,
{
    assert_ranges_with(a, b, &AlmostEqualTo::new(tolerance), location)
}
