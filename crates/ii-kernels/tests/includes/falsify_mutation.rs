// Part 3: Mutation Detection Tests (5 tests)

/// Mutation: independent accumulation, Euclidean remainder flips negative terms
#[test]
fn mutation_ia_detect_euclidean_remainder() {
    let a = common::filled(-7);
    let b = common::filled(1);
    let c = common::filled(0);
    let correct = independent_accumulation_scalar(&a, &b, &c);

    let mut mutated = 0i32;
    for i in 0..TRIP_COUNT {
        let term = a[i].rem_euclid(2) * b[i].rem_euclid(3)
            + c[i].rem_euclid(3) * b[i].rem_euclid(5)
            + a[i].rem_euclid(7);
        mutated = mutated.wrapping_add(term);
    }
    assert_eq!(correct, -100);
    assert_eq!(mutated, 100);
}

/// Mutation: independent accumulation, swapped moduli in the c-term
#[test]
fn mutation_ia_detect_swapped_moduli() {
    let a = common::filled(0);
    let b = common::filled(2);
    let c = common::filled(4);
    let correct = independent_accumulation_scalar(&a, &b, &c);

    let mut mutated = 0i32;
    for i in 0..TRIP_COUNT {
        let term = (a[i] % 2) * (b[i] % 3) + (c[i] % 5) * (b[i] % 3) + (a[i] % 7);
        mutated = mutated.wrapping_add(term);
    }
    assert_ne!(
        correct, mutated,
        "swapped moduli should change the result but both gave {correct}"
    );
}

/// Mutation: independent accumulation, accumulator overwritten instead of added to
#[test]
fn mutation_ia_detect_overwritten_accumulator() {
    let ones = common::filled(1);
    let correct = independent_accumulation_scalar(&ones, &ones, &ones);

    let mut mutated = 0i32;
    for i in 0..TRIP_COUNT {
        mutated = independent_accumulation_term(ones[i], ones[i], ones[i]);
    }
    assert_eq!(correct, 300);
    assert_eq!(mutated, 3);
}

/// Mutation: scalar temporary, loop stops one iteration early
#[test]
fn mutation_st_detect_short_loop() {
    let zero = common::filled(0);
    let mut d = common::filled(0);
    d[TRIP_COUNT - 1] = 5;
    let correct = scalar_temporary_scalar(&zero, &zero, &zero, &d);

    let mut mutated = 0i32;
    for i in 0..TRIP_COUNT - 1 {
        mutated = mutated.wrapping_add(scalar_temporary_step(zero[i], zero[i], zero[i], d[i]));
    }
    assert_eq!(correct, 5);
    assert_eq!(mutated, 0, "short loop should miss d[{}]", TRIP_COUNT - 1);
}

/// Mutation: scalar temporary, subtraction operands reversed
#[test]
fn mutation_st_detect_reversed_subtraction() {
    let two = common::filled(2);
    let one = common::filled(1);
    let zero = common::filled(0);
    let correct = scalar_temporary_scalar(&two, &two, &one, &zero);

    let mut mutated = 0i32;
    for i in 0..TRIP_COUNT {
        let tmp = one[i].wrapping_sub(two[i].wrapping_mul(two[i]));
        mutated = mutated.wrapping_add(tmp.wrapping_add(zero[i]));
    }
    assert_eq!(correct, 300);
    assert_eq!(mutated, -300);
}
