/// FALSIFY-IA-001: All-ones value
/// Contract: independent-accumulation-v1.yaml
/// Prediction: a = b = c = 1 gives 300
/// If fails: a remainder term is dropped or an iteration is skipped
#[test]
fn falsify_ia_001_all_ones() {
    let ones = common::filled(1);
    let result = independent_accumulation_scalar(&ones, &ones, &ones);
    assert_eq!(result, 300, "FALSIFY-IA-001 failed: got {result}, expected 300");
}

/// FALSIFY-IA-002: All-zeros value
/// Contract: independent-accumulation-v1.yaml
/// Prediction: a = b = c = 0 gives 0
/// If fails: the accumulator does not start at zero
#[test]
fn falsify_ia_002_all_zeros() {
    let zeros = common::filled(0);
    let result = independent_accumulation_scalar(&zeros, &zeros, &zeros);
    assert_eq!(result, 0, "FALSIFY-IA-002 failed: got {result}, expected 0");
}

proptest! {
    /// FALSIFY-IA-003: Order independence
    /// Contract: independent-accumulation-v1.yaml
    /// Prediction: reversing or rotating all inputs together leaves the result unchanged
    /// If fails: an iteration reads state left behind by another iteration
    #[test]
    fn falsify_ia_003_order_independence(
        a in common::any_array(),
        b in common::any_array(),
        c in common::any_array(),
        k in 0usize..TRIP_COUNT,
    ) {
        let reference = independent_accumulation_scalar(&a, &b, &c);
        let rev = independent_accumulation_scalar(
            &common::reversed(&a),
            &common::reversed(&b),
            &common::reversed(&c),
        );
        let rot = independent_accumulation_scalar(
            &common::rotated(&a, k),
            &common::rotated(&b, k),
            &common::rotated(&c, k),
        );
        prop_assert_eq!(rev, reference, "FALSIFY-IA-003 failed: reversal changed the result");
        prop_assert_eq!(rot, reference, "FALSIFY-IA-003 failed: rotation by {} changed the result", k);
    }
}

/// FALSIFY-IA-004: Truncating remainder
/// Contract: independent-accumulation-v1.yaml
/// Prediction: (-7) % 2 contributes -1, not 1
/// If fails: the kernel uses a floored or Euclidean remainder
#[test]
fn falsify_ia_004_truncating_remainder() {
    // a = -7, b = 1, c = 0: (a % 2)(b % 3) = -1, c-term 0, a % 7 = 0.
    assert_eq!(independent_accumulation_term(-7, 1, 0), -1);
    let a = common::filled(-7);
    let b = common::filled(1);
    let zeros = common::filled(0);
    let result = independent_accumulation_scalar(&a, &b, &zeros);
    assert_eq!(result, -100, "FALSIFY-IA-004 failed: got {result}, expected -100");
}

proptest! {
    /// FALSIFY-IA-005: SIMD equivalence
    /// Contract: independent-accumulation-v1.yaml
    /// Prediction: avx2 result equals scalar result for arbitrary i32 inputs
    /// If fails: the vector remainder or the horizontal reduction is wrong
    #[test]
    fn falsify_ia_005_simd_equivalence(
        a in common::any_array(),
        b in common::any_array(),
        c in common::any_array(),
    ) {
        let scalar = independent_accumulation_scalar(&a, &b, &c);
        let detected = independent_accumulation(Backend::detect(), &a, &b, &c).unwrap();
        prop_assert_eq!(detected, scalar, "FALSIFY-IA-005 failed on {:?}", Backend::detect());
    }
}

/// FALSIFY-IA-006: Boundary indices
/// Contract: independent-accumulation-v1.yaml
/// Prediction: changing a_0 or a_99 changes the result by exactly that term's delta
/// If fails: the loop bounds are off by one
#[test]
fn falsify_ia_006_boundary_indices() {
    let zeros = common::filled(0);
    let base = independent_accumulation_scalar(&zeros, &zeros, &zeros);
    for idx in [0, TRIP_COUNT - 1] {
        let mut a = zeros;
        a[idx] = 5;
        let delta = independent_accumulation_term(5, 0, 0) - independent_accumulation_term(0, 0, 0);
        let result = independent_accumulation_scalar(&a, &zeros, &zeros);
        assert_eq!(
            result,
            base + delta,
            "FALSIFY-IA-006 failed: a[{idx}] contributed {} instead of {delta}",
            result - base
        );
    }
}
