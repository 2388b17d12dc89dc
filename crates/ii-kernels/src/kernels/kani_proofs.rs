//! Kani bounded proof harnesses for the fixture contracts.
//!
//! Promotes the order-independence and no-carry properties from proptest
//! sampling to proofs over every input the harness admits.
//!
//! All code here is behind `#[cfg(kani)]` and invisible to normal builds.

use super::independent_accumulation::{
    independent_accumulation_scalar, independent_accumulation_term,
};
use super::scalar_temporary::{scalar_temporary_scalar, scalar_temporary_step};
use super::{KernelArray, TRIP_COUNT};

/// Symbolic array drawn from the harness input range `[0, 10)`.
fn any_fixture_array() -> KernelArray {
    let values: KernelArray = kani::any();
    kani::assume(values.iter().all(|v| (0..10).contains(v)));
    values
}

// ════════════════════════════════════════════════════════════════════════════
// Independent accumulation
// ════════════════════════════════════════════════════════════════════════════

/// KANI-IA-001: Swapping two iterations leaves the result unchanged.
/// Obligation: IA-SYM-001
/// Strategy: bounded_int
/// Bound: 100 iterations
#[kani::proof]
#[kani::unwind(101)]
fn verify_independent_accumulation_swap_invariant() {
    let mut a = any_fixture_array();
    let mut b = any_fixture_array();
    let mut c = any_fixture_array();
    let i: usize = kani::any();
    let j: usize = kani::any();
    kani::assume(i < TRIP_COUNT && j < TRIP_COUNT);

    let before = independent_accumulation_scalar(&a, &b, &c);
    a.swap(i, j);
    b.swap(i, j);
    c.swap(i, j);
    let after = independent_accumulation_scalar(&a, &b, &c);

    assert_eq!(before, after, "KANI-IA-001: swap({i}, {j}) changed the result");
}

/// KANI-IA-002: Each term is within [-16, 16] for every i32 input.
/// Obligation: IA-INV-001
/// Strategy: exhaustive
/// Bound: 1 iteration
#[kani::proof]
fn verify_independent_accumulation_term_bound() {
    let term = independent_accumulation_term(kani::any(), kani::any(), kani::any());
    assert!(
        (-16..=16).contains(&term),
        "KANI-IA-002: term {term} out of bounds"
    );
}

// ════════════════════════════════════════════════════════════════════════════
// Scalar temporary
// ════════════════════════════════════════════════════════════════════════════

/// KANI-ST-001: Replacing one iteration's inputs changes the result by that
/// step's delta and nothing else.
/// Obligation: ST-INV-001
/// Strategy: bounded_int
/// Bound: 100 iterations
#[kani::proof]
#[kani::unwind(101)]
fn verify_scalar_temporary_no_carry() {
    let mut a = any_fixture_array();
    let mut b = any_fixture_array();
    let mut c = any_fixture_array();
    let mut d = any_fixture_array();
    let k: usize = kani::any();
    kani::assume(k < TRIP_COUNT);

    let before = scalar_temporary_scalar(&a, &b, &c, &d);
    let old_step = scalar_temporary_step(a[k], b[k], c[k], d[k]);

    a[k] = kani::any();
    b[k] = kani::any();
    c[k] = kani::any();
    d[k] = kani::any();
    let new_step = scalar_temporary_step(a[k], b[k], c[k], d[k]);
    let after = scalar_temporary_scalar(&a, &b, &c, &d);

    assert_eq!(
        after,
        before.wrapping_sub(old_step).wrapping_add(new_step),
        "KANI-ST-001: iteration {k} leaked into other iterations"
    );
}

/// KANI-ST-002: Adding e to d_k adds e to the result.
/// Obligation: ST-LIN-001
/// Strategy: bounded_int
/// Bound: 100 iterations
#[kani::proof]
#[kani::unwind(101)]
fn verify_scalar_temporary_additive_in_d() {
    let a = any_fixture_array();
    let b = any_fixture_array();
    let c = any_fixture_array();
    let mut d = any_fixture_array();
    let k: usize = kani::any();
    let e: i32 = kani::any();
    kani::assume(k < TRIP_COUNT);

    let before = scalar_temporary_scalar(&a, &b, &c, &d);
    d[k] = d[k].wrapping_add(e);
    let after = scalar_temporary_scalar(&a, &b, &c, &d);

    assert_eq!(after, before.wrapping_add(e), "KANI-ST-002: d is not additive");
}
