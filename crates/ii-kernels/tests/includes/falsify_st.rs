/// FALSIFY-ST-001: Exact value
/// Contract: scalar-temporary-v1.yaml
/// Prediction: a = b = 2, c = 1, d = 0 gives 300
/// If fails: tmp is computed in the wrong order or added twice
#[test]
fn falsify_st_001_exact_value() {
    let two = common::filled(2);
    let one = common::filled(1);
    let zero = common::filled(0);
    let result = scalar_temporary_scalar(&two, &two, &one, &zero);
    assert_eq!(result, 300, "FALSIFY-ST-001 failed: got {result}, expected 300");
}

/// FALSIFY-ST-002: All-zeros value
/// Contract: scalar-temporary-v1.yaml
/// Prediction: all-zero inputs give 0
/// If fails: the accumulator or tmp starts non-zero
#[test]
fn falsify_st_002_all_zeros() {
    let zero = common::filled(0);
    let result = scalar_temporary_scalar(&zero, &zero, &zero, &zero);
    assert_eq!(result, 0, "FALSIFY-ST-002 failed: got {result}, expected 0");
}

proptest! {
    /// FALSIFY-ST-003: No carry
    /// Contract: scalar-temporary-v1.yaml
    /// Prediction: perturbing one iteration changes only that iteration's contribution
    /// If fails: tmp survives from one iteration into the next
    #[test]
    fn falsify_st_003_no_carry(
        a in common::fixture_array(),
        b in common::fixture_array(),
        c in common::fixture_array(),
        d in common::fixture_array(),
        k in 0usize..TRIP_COUNT,
        new in (0i32..10, 0i32..10, 0i32..10),
    ) {
        let before = scalar_temporary_scalar(&a, &b, &c, &d);
        let old_step = scalar_temporary_step(a[k], b[k], c[k], d[k]);

        let (mut a2, mut b2, mut c2) = (a, b, c);
        a2[k] = new.0;
        b2[k] = new.1;
        c2[k] = new.2;
        let new_step = scalar_temporary_step(a2[k], b2[k], c2[k], d[k]);
        let after = scalar_temporary_scalar(&a2, &b2, &c2, &d);

        prop_assert_eq!(
            after,
            before.wrapping_sub(old_step).wrapping_add(new_step),
            "FALSIFY-ST-003 failed: iteration {} leaked into its neighbours", k
        );
    }
}

/// FALSIFY-ST-004: Carry mutation detected
/// Contract: scalar-temporary-v1.yaml
/// Prediction: a kernel that carries tmp across iterations disagrees with the reference
/// If fails: the suite cannot tell a loop-carried tmp from a scoped one
#[test]
fn falsify_st_004_carry_mutation_detected() {
    let two = common::filled(2);
    let one = common::filled(1);
    let zero = common::filled(0);

    // Uses the previous iteration's tmp, so iteration 0 sees tmp = 0.
    let mut carried = 0i32;
    let mut tmp = 0i32;
    for i in 0..TRIP_COUNT {
        carried = carried.wrapping_add(tmp.wrapping_add(zero[i]));
        tmp = two[i].wrapping_mul(two[i]).wrapping_sub(one[i]);
    }

    let reference = scalar_temporary_scalar(&two, &two, &one, &zero);
    assert_eq!(carried, 297);
    assert_ne!(
        carried, reference,
        "FALSIFY-ST-004 failed: carried tmp produced the reference value {reference}"
    );
}

/// FALSIFY-ST-005: Wraparound
/// Contract: scalar-temporary-v1.yaml
/// Prediction: i32::MAX * 2 wraps instead of panicking
/// If fails: the kernel uses checked or panicking arithmetic
#[test]
fn falsify_st_005_wraparound() {
    let max = common::filled(i32::MAX);
    let two = common::filled(2);
    let zero = common::filled(0);
    // MAX * 2 wraps to -2 in each of 100 iterations.
    let result = scalar_temporary_scalar(&max, &two, &zero, &zero);
    assert_eq!(result, -200, "FALSIFY-ST-005 failed: got {result}, expected -200");
}

proptest! {
    /// FALSIFY-ST-006: SIMD equivalence
    /// Contract: scalar-temporary-v1.yaml
    /// Prediction: avx2 result equals scalar result for arbitrary i32 inputs
    /// If fails: the vector multiply or the scalar tail is wrong
    #[test]
    fn falsify_st_006_simd_equivalence(
        a in common::any_array(),
        b in common::any_array(),
        c in common::any_array(),
        d in common::any_array(),
    ) {
        let scalar = scalar_temporary_scalar(&a, &b, &c, &d);
        let detected = scalar_temporary(Backend::detect(), &a, &b, &c, &d).unwrap();
        prop_assert_eq!(detected, scalar, "FALSIFY-ST-006 failed on {:?}", Backend::detect());
    }
}
