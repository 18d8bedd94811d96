// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! End-to-end checks of the integer entry points, strings in and strings out.

mod util;

use bignum_kernels::api::biginteger::*;
use bignum_kernels::errors::KernelError;
use util::strs;

#[test]
fn biginteger_normalises_literals() {
    let out = biginteger(&[Some("007"), Some("-0"), Some("+42"), Some("0xff"), Some("NA"), None, Some("1e3")]);
    assert_eq!(out, strs(&[Some("7"), Some("0"), Some("42"), Some("255"), None, None, None]));
}

#[test]
fn format_round_trips_canonical_form() {
    let input = [Some("000123456789012345678901234567890"), Some("-5"), None];
    let out = biginteger_format(&input, "dec").unwrap();
    assert_eq!(out, strs(&[Some("123456789012345678901234567890"), Some("-5"), None]));
    let sci = biginteger_format(&[Some("123000")], "sci").unwrap();
    assert_eq!(sci, strs(&[Some("1.23e+05")]));
    assert!(matches!(biginteger_format(&[Some("1")], "fixed"), Err(KernelError::InvalidArguments(_))));
}

#[test]
fn add_recycles_shorter_operand() {
    let out = biginteger_add(&[Some("1"), Some("2"), Some("3"), Some("4")], &[Some("10"), Some("20")]).unwrap();
    assert_eq!(out, strs(&[Some("11"), Some("22"), Some("13"), Some("24")]));
}

#[test]
fn mismatched_lengths_fail_the_call() {
    let err = biginteger_multiply(&[Some("1"), Some("2"), Some("3")], &[Some("1"), Some("2")]).unwrap_err();
    assert!(matches!(err, KernelError::Recycling(_)));
}

#[test]
fn missing_operands_propagate() {
    let out = biginteger_subtract(&[Some("5"), None], &[Some("2"), Some("1")]).unwrap();
    assert_eq!(out, strs(&[Some("3"), None]));
}

#[test]
fn exact_arithmetic_beyond_native_range() {
    let big = "123456789012345678901234567890";
    let out = biginteger_multiply(&[Some(big)], &[Some(big)]).unwrap();
    assert_eq!(
        out,
        strs(&[Some("15241578753238836750495351562536198787501905199875019052100")])
    );
}

#[test]
fn quotient_and_modulo_are_floored() {
    let lhs = [Some("7"), Some("-7"), Some("7"), Some("-7")];
    let rhs = [Some("2"), Some("2"), Some("-2"), Some("-2")];
    assert_eq!(
        biginteger_quotient(&lhs, &rhs).unwrap(),
        strs(&[Some("3"), Some("-4"), Some("-4"), Some("3")])
    );
    assert_eq!(
        biginteger_modulo(&lhs, &rhs).unwrap(),
        strs(&[Some("1"), Some("1"), Some("-1"), Some("-1")])
    );
}

#[test]
fn quotient_by_zero_raises() {
    assert!(matches!(
        biginteger_quotient(&[Some("10")], &[Some("0")]),
        Err(KernelError::DivideByZero(_))
    ));
    assert!(matches!(
        biginteger_modulo(&[Some("10")], &[Some("0")]),
        Err(KernelError::DivideByZero(_))
    ));
}

#[test]
fn pow_with_native_exponents() {
    let out = biginteger_pow(&[Some("2"), Some("-1"), Some("3"), None], &[Some(100), Some(-3), Some(-1), Some(2)]).unwrap();
    assert_eq!(
        out,
        strs(&[Some("1267650600228229401496703205376"), Some("-1"), None, None])
    );
}

#[test]
fn sum_and_prod_respect_na_rm() {
    let x = [Some("1"), None, Some("3")];
    assert_eq!(biginteger_sum(&x, false), vec![None]);
    assert_eq!(biginteger_sum(&x, true), strs(&[Some("4")]));
    assert_eq!(biginteger_prod(&x, true), strs(&[Some("3")]));
    assert_eq!(biginteger_sum::<&str>(&[], false), strs(&[Some("0")]));
    assert_eq!(biginteger_prod::<&str>(&[], false), strs(&[Some("1")]));
}

#[test]
fn cumulative_stops_at_first_missing() {
    assert_eq!(
        biginteger_cumsum(&[Some("1"), None, Some("3")]),
        strs(&[Some("1"), None, None])
    );
    let x = [Some("3"), Some("1"), Some("4"), Some("1"), Some("5")];
    assert_eq!(
        biginteger_cummax(&x),
        strs(&[Some("3"), Some("3"), Some("4"), Some("4"), Some("5")])
    );
    assert_eq!(
        biginteger_cummin(&x),
        strs(&[Some("3"), Some("1"), Some("1"), Some("1"), Some("1")])
    );
    assert_eq!(
        biginteger_cumprod(&x),
        strs(&[Some("3"), Some("3"), Some("12"), Some("12"), Some("60")])
    );
}

#[test]
fn compare_with_na_equal() {
    assert_eq!(biginteger_compare(&[None::<&str>], &[None::<&str>], true).unwrap(), vec![Some(0)]);
    assert_eq!(biginteger_compare(&[None::<&str>], &[None::<&str>], false).unwrap(), vec![None]);
    assert_eq!(
        biginteger_compare(&[Some("1"), Some("2"), Some("3")], &[Some("2")], false).unwrap(),
        vec![Some(-1), Some(0), Some(1)]
    );
}

#[test]
fn rank_ties_take_lowest() {
    assert_eq!(
        biginteger_rank(&[Some("3"), Some("1"), Some("1"), Some("2")]),
        vec![Some(4), Some(1), Some(1), Some(3)]
    );
}

#[test]
fn narrowing_conversions() {
    let x = [Some("0"), Some("-12"), Some("2147483648"), Some("-2147483648"), None];
    assert_eq!(
        biginteger_to_integer(&x),
        vec![Some(0), Some(-12), None, None, None]
    );
    assert_eq!(
        biginteger_to_logical(&x),
        vec![Some(false), Some(true), Some(true), Some(true), None]
    );
    assert_eq!(
        biginteger_to_double(&[Some("-4611686018427387904"), Some("123456789"), None]),
        vec![Some(-4611686018427387904.0), Some(123456789.0), None]
    );
}

#[test]
fn abs_and_sign() {
    let x = [Some("-5"), Some("0"), Some("7"), None];
    assert_eq!(biginteger_abs(&x).unwrap(), strs(&[Some("5"), Some("0"), Some("7"), None]));
    assert_eq!(biginteger_sign(&x).unwrap(), strs(&[Some("-1"), Some("0"), Some("1"), None]));
}

#[test]
fn sequences_end_to_end() {
    assert_eq!(
        biginteger_seq_to_by(&[Some("1")], &[Some("10")], &[Some("3")]).unwrap(),
        strs(&[Some("1"), Some("4"), Some("7"), Some("10")])
    );
    assert_eq!(
        biginteger_seq_by_lo(&[Some("5")], &[Some("-2")], &[Some(3)]).unwrap(),
        strs(&[Some("5"), Some("3"), Some("1")])
    );
    assert_eq!(
        biginteger_seq_to_lo(&[Some("0")], &[Some("12")], &[Some(4)]).unwrap(),
        strs(&[Some("0"), Some("4"), Some("8"), Some("12")])
    );
    assert!(matches!(
        biginteger_seq_to_lo(&[Some("0")], &[Some("1")], &[Some(5)]),
        Err(KernelError::Domain(_))
    ));
    assert!(matches!(
        biginteger_seq_by_lo(&[Some("0")], &[Some("1")], &[Some(-1)]),
        Err(KernelError::InvalidArguments(_))
    ));
    for to in ["4", "9"] {
        assert!(matches!(
            biginteger_seq_to_by(&[Some("4")], &[Some(to)], &[Some("0")]),
            Err(KernelError::InvalidArguments(_))
        ));
    }
}

#[test]
fn sequences_concatenate_per_aligned_triple() {
    let out = biginteger_seq_to_by(&[Some("1"), Some("10")], &[Some("3"), Some("8")], &[Some("1"), Some("-1")]).unwrap();
    assert_eq!(out, strs(&[Some("1"), Some("2"), Some("3"), Some("10"), Some("9"), Some("8")]));
}
