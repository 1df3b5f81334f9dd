#![allow(dead_code)]

use std::borrow::Cow;
use std::cell::Cell;

use numcheck::{CheckError, FailureDetail, HostSequence};

/// Container standing in for accelerator memory: every host materialisation
/// is a copy and is counted.
pub struct DeviceBuffer<T> {
    data: Vec<T>,
    copies: Cell<usize>,
}

impl<T> DeviceBuffer<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            copies: Cell::new(0),
        }
    }

    pub fn copies(&self) -> usize {
        self.copies.get()
    }
}

impl<T: Clone> HostSequence for DeviceBuffer<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn to_host(&self) -> Cow<'_, [T]> {
        self.copies.set(self.copies.get() + 1);
        Cow::Owned(self.data.clone())
    }
}

pub fn expect_failure(result: Result<(), CheckError>) -> FailureDetail {
    match result {
        Err(CheckError::Failure(detail)) => detail,
        other => panic!("expected assertion failure, got {other:?}"),
    }
}

pub fn expect_structural_code(result: Result<(), CheckError>) -> String {
    match result {
        Err(CheckError::Structural(info)) => info.code,
        other => panic!("expected structural error, got {other:?}"),
    }
}
