//! End-to-end semantic checks for the arithmetic encodings: each test emits
//! DIMACS through the finaliser, solves the instance with varisat, and reads
//! integer results back out of the model.

mod common;

use common::{solve_formula, uint_of, value_of};
use primecnf::encoder::formula::{one_nbit, zero_1bit};
use primecnf::encoder::Session;
use proptest::prelude::*;

fn solve_add(a: u64, b: u64, width: u32) -> (u64, bool) {
    let mut s = Session::new();
    let mut f = s.add_nbit("a", "b", "r", "ov", width);
    f.extend(s.input_equals("a", a, width));
    f.extend(s.input_equals("b", b, width));
    let (cnf, model) = solve_formula(&s, &f).expect("adder with free outputs is satisfiable");
    (uint_of(&cnf, &model, "r", width), value_of(&cnf, &model, "ov"))
}

#[test]
fn adder_wraps_and_reports_the_carry() {
    assert_eq!(solve_add(5, 3, 4), (8, false));
    assert_eq!(solve_add(0, 0, 4), (0, false));
    assert_eq!(solve_add(15, 15, 4), (14, true));
    assert_eq!(solve_add(5, 3, 3), (0, true));
    assert_eq!(solve_add(1, 1, 1), (0, true));
}

fn solve_mul(a: u64, b: u64, width: u32) -> (u64, bool) {
    let mut s = Session::new();
    let mut f = s.mul_nbit("a", "b", "r", "ov", width);
    f.extend(s.input_equals("a", a, width));
    f.extend(s.input_equals("b", b, width));
    let (cnf, model) = solve_formula(&s, &f).expect("multiplier with free outputs is satisfiable");
    (uint_of(&cnf, &model, "r", width), value_of(&cnf, &model, "ov"))
}

#[test]
fn multiplier_wraps_and_reports_overflow() {
    assert_eq!(solve_mul(5, 3, 4), (15, false));
    assert_eq!(solve_mul(0, 7, 3), (0, false));
    assert_eq!(solve_mul(5, 3, 3), (7, true));
    assert_eq!(solve_mul(3, 3, 2), (1, true));
}

fn solve_divmod(a: u64, b: u64, width: u32) -> Option<(u64, u64)> {
    let mut s = Session::new();
    let mut f = s.divmod_nbit("a", "b", "q", "r", width);
    f.extend(s.input_equals("a", a, width));
    f.extend(s.input_equals("b", b, width));
    solve_formula(&s, &f).map(|(cnf, model)| {
        (
            uint_of(&cnf, &model, "q", width),
            uint_of(&cnf, &model, "r", width),
        )
    })
}

#[test]
fn division_satisfies_the_euclidean_identity() {
    assert_eq!(solve_divmod(7, 3, 3), Some((2, 1)));
    assert_eq!(solve_divmod(6, 2, 3), Some((3, 0)));
    assert_eq!(solve_divmod(1, 5, 3), Some((0, 1)));
    assert_eq!(solve_divmod(5, 5, 3), Some((1, 0)));
}

#[test]
fn division_by_zero_is_unsatisfiable() {
    assert_eq!(solve_divmod(3, 0, 3), None);
}

#[test]
fn quotient_and_remainder_are_unique() {
    // excluding the true quotient or remainder must kill the instance
    for (exclude, value) in [("q", 2u64), ("r", 1u64)] {
        let mut s = Session::new();
        let mut f = s.divmod_nbit("a", "b", "q", "r", 3);
        f.extend(s.input_equals("a", 7, 3));
        f.extend(s.input_equals("b", 3, 3));
        f.extend(s.input_not_equals(exclude, value, 3));
        assert!(solve_formula(&s, &f).is_none(), "{} != {}", exclude, value);
    }
}

fn solve_pow(a: u64, e: u64, width: u32) -> Option<u64> {
    let mut s = Session::new();
    let mut f = s.pow_nbit("a", "e", "r", "ov", width);
    f.extend(s.input_equals("a", a, width));
    f.extend(s.input_equals("e", e, width));
    f.extend(s.pin_bit("ov", false));
    f.extend(s.input_equals(&one_nbit(width), 1, width));
    f.extend(s.pin_bit(&zero_1bit(), false));
    solve_formula(&s, &f).map(|(cnf, model)| uint_of(&cnf, &model, "r", width))
}

#[test]
fn exponentiation_by_repeated_squaring() {
    assert_eq!(solve_pow(2, 3, 4), Some(8));
    assert_eq!(solve_pow(3, 2, 4), Some(9));
    assert_eq!(solve_pow(5, 1, 4), Some(5));
    assert_eq!(solve_pow(3, 0, 4), Some(1));
}

#[test]
fn exponentiation_overflow_is_unsatisfiable_when_disallowed() {
    assert_eq!(solve_pow(3, 2, 2), None);
    assert_eq!(solve_pow(4, 2, 4), None);
}

fn solve_powmod(b: u64, e: u64, m: u64, width: u32) -> Option<u64> {
    let mut s = Session::new();
    let mut f = s.powmod_nbit("b", "e", "m", "r", width);
    f.extend(s.input_equals("b", b, width));
    f.extend(s.input_equals("e", e, width));
    f.extend(s.input_equals("m", m, width));
    f.extend(s.input_equals(&one_nbit(2 * width), 1, 2 * width));
    solve_formula(&s, &f).map(|(cnf, model)| uint_of(&cnf, &model, "r", width))
}

#[test]
fn modular_exponentiation_matches_number_theory() {
    assert_eq!(solve_powmod(3, 2, 3, 2), Some(0));
    assert_eq!(solve_powmod(2, 3, 5, 3), Some(3));
    assert_eq!(solve_powmod(3, 4, 5, 3), Some(1));
}

#[test]
fn zero_extension_preserves_the_value() {
    let mut s = Session::new();
    let mut f = s.zero_extend("a", "wide", 3);
    f.extend(s.input_equals("a", 5, 3));
    let (cnf, model) = solve_formula(&s, &f).expect("zero extension is total");
    assert_eq!(uint_of(&cnf, &model, "wide", 6), 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn ripple_carry_adder_matches_machine_addition(a in 0u64..16, b in 0u64..16) {
        let (r, ov) = solve_add(a, b, 4);
        prop_assert_eq!(r, (a + b) % 16);
        prop_assert_eq!(ov, a + b >= 16);
    }

    #[test]
    fn shift_and_add_multiplier_matches_machine_multiplication(a in 0u64..8, b in 0u64..8) {
        let (r, ov) = solve_mul(a, b, 3);
        prop_assert_eq!(r, (a * b) % 8);
        prop_assert_eq!(ov, a * b >= 8);
    }
}
