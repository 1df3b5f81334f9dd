mod common;

use std::collections::VecDeque;

use numcheck::{
    assert_almost_equal_containers, assert_equal_containers, CheckError, SourceLocation,
    Tolerance,
};

use common::{expect_failure, expect_structural_code, DeviceBuffer};

#[test]
fn size_mismatch_is_raised_before_materialising() {
    let a = DeviceBuffer::new(vec![1, 2, 3]);
    let b = DeviceBuffer::new(vec![1, 2, 3, 4, 5]);
    let result = assert_equal_containers(&a, &b, &SourceLocation::new("spmv.rs", 8));
    let err = result.clone().unwrap_err();
    assert!(err.failure().is_none());
    assert!(!err.to_string().contains("Sequences differ"));
    assert_eq!(expect_structural_code(result), "size-mismatch");
    assert_eq!(a.copies(), 0);
    assert_eq!(b.copies(), 0);
}

#[test]
fn equal_sizes_materialise_once_and_compare() {
    let a = DeviceBuffer::new(vec![1, 2, 3]);
    let b = DeviceBuffer::new(vec![1, 5, 3]);
    let detail = expect_failure(assert_equal_containers(&a, &b, &SourceLocation::default()));
    let report = detail.report.expect("sequence report");
    assert_eq!((report.mismatches, report.compared), (1, 3));
    assert_eq!(a.copies(), 1);
    assert_eq!(b.copies(), 1);
}

#[test]
fn host_containers_mix_freely() -> Result<(), CheckError> {
    let vector = vec![1.0, 2.0, 3.0];
    let array = [1.0, 2.0, 3.0];
    let mut deque = VecDeque::from(vec![2.0, 3.0]);
    deque.push_front(1.0);
    assert_equal_containers(&vector, &array, &SourceLocation::default())?;
    assert_equal_containers(&deque, vector.as_slice(), &SourceLocation::default())?;
    Ok(())
}

#[test]
fn approximate_containers_check_sizes_first() {
    let a = DeviceBuffer::new(vec![0.1_f32; 3]);
    let b = DeviceBuffer::new(vec![0.1_f64; 4]);
    let code = expect_structural_code(assert_almost_equal_containers(
        &a,
        &b,
        &SourceLocation::default(),
        Tolerance::default(),
    ));
    assert_eq!(code, "size-mismatch");
    assert_eq!(a.copies() + b.copies(), 0);
}

#[test]
fn approximate_containers_compare_within_tolerance() -> Result<(), CheckError> {
    let a = DeviceBuffer::new(vec![0.1_f32, 0.2, 0.3]);
    let b = vec![0.1_f64, 0.2, 0.3];
    assert_almost_equal_containers(&a, &b, &SourceLocation::default(), Tolerance::default())?;
    Ok(())
}
