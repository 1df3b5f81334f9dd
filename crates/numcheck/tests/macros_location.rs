use std::num::ParseIntError;

use numcheck::{BoxError, CheckError, SignalKind, Tolerance};

fn unstable_kernel() -> Result<(), CheckError> {
    numcheck::known_failure!();
}

#[test]
fn macros_capture_file_and_line() {
    let line = i64::from(line!()) + 1;
    let err = numcheck::assert_equal!(1 + 1, 3).unwrap_err();
    assert!(err.location().file.ends_with("macros_location.rs"));
    assert_eq!(err.location().line, line);
}

#[test]
fn scalar_macros_pass_and_fail() -> Result<(), CheckError> {
    numcheck::assert_equal!(2 * 3, 6)?;
    numcheck::assert_equal_quiet!(vec![1, 2], vec![1, 2])?;
    numcheck::assert_lequal!(3, 5)?;
    numcheck::assert_gequal!(5, 3)?;
    numcheck::assert_almost_equal!(0.1 + 0.2, 0.3)?;
    numcheck::assert_almost_equal!(10.0, 10.4, Tolerance::new(0.5, 0.0)?)?;
    assert!(numcheck::assert_lequal!(5, 3).is_err());
    Ok(())
}

#[test]
fn range_macro_accepts_optional_predicate() -> Result<(), CheckError> {
    let a = [1, 2, 3];
    numcheck::assert_equal_ranges!(a.iter(), [1, 2, 3].iter())?;
    numcheck::assert_equal_ranges!(a.iter(), [2, 3, 4].iter(), |x, y| **x + 1 == **y)?;
    Ok(())
}

#[test]
fn throws_macro_wraps_results() -> Result<(), BoxError> {
    numcheck::assert_throws!("x1".parse::<u8>(), ParseIntError)?;
    let err = numcheck::assert_throws!("12".parse::<u8>(), ParseIntError).unwrap_err();
    assert_eq!(numcheck::signal_kind(err.as_ref()), Some(SignalKind::Failure));
    Ok(())
}

#[test]
fn known_failure_macro_returns_early() {
    let err = unstable_kernel().unwrap_err();
    assert_eq!(err.kind(), SignalKind::KnownFailure);
    assert!(err.location().file.ends_with("macros_location.rs"));
}
