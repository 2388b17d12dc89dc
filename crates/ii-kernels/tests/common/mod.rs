//! Shared helpers for the fixture falsification tests.
#![allow(dead_code)]

use ii_kernels::kernels::{KernelArray, TRIP_COUNT};
use proptest::prelude::*;

/// Array with every element set to `value`.
pub fn filled(value: i32) -> KernelArray {
    [value; TRIP_COUNT]
}

/// Copy a slice of exactly `TRIP_COUNT` values into a kernel array.
pub fn to_array(values: &[i32]) -> KernelArray {
    values
        .try_into()
        .unwrap_or_else(|_| panic!("expected {TRIP_COUNT} values, got {}", values.len()))
}

/// `values` rotated left by `k` positions.
pub fn rotated(values: &KernelArray, k: usize) -> KernelArray {
    let mut out = *values;
    out.rotate_left(k % TRIP_COUNT);
    out
}

pub fn reversed(values: &KernelArray) -> KernelArray {
    let mut out = *values;
    out.reverse();
    out
}

/// Arrays drawn from the harness input range `[0, 10)`.
pub fn fixture_array() -> impl Strategy<Value = KernelArray> {
    proptest::collection::vec(0i32..10, TRIP_COUNT).prop_map(|v| to_array(&v))
}

/// Arrays over the full i32 range, negatives and extremes included.
pub fn any_array() -> impl Strategy<Value = KernelArray> {
    proptest::collection::vec(any::<i32>(), TRIP_COUNT).prop_map(|v| to_array(&v))
}
