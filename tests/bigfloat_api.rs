// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! End-to-end checks of the float entry points at the default precision.

mod util;

use bignum_kernels::api::bigfloat::*;
use bignum_kernels::errors::KernelError;
use util::{assert_close, assert_strings_close, strs};

#[test]
fn bigfloat_normalises_literals() {
    let out = bigfloat(&[Some("1.50"), Some("NA"), Some("abc"), Some("Inf"), Some("-nan"), None, Some("-0.000120")]);
    assert_eq!(
        out,
        strs(&[Some("1.5e+00"), None, None, Some("Inf"), Some("NaN"), None, Some("-1.2e-04")])
    );
}

#[test]
fn literals_round_to_fifty_digits() {
    let long = format!("0.{}", "1".repeat(60));
    let out = bigfloat(&[Some(long.as_str())]);
    assert_eq!(out, vec![Some(format!("1.{}e-01", "1".repeat(49)))]);
}

#[test]
fn add_recycles_shorter_operand() {
    let out = bigfloat_add(&[Some("1.5"), Some("2.5"), Some("3.5"), Some("4.5")], &[Some("1"), Some("2")]).unwrap();
    assert_eq!(
        out,
        strs(&[Some("2.5e+00"), Some("4.5e+00"), Some("4.5e+00"), Some("6.5e+00")])
    );
    assert!(matches!(
        bigfloat_add(&[Some("1"), Some("2"), Some("3")], &[Some("1"), Some("2")]),
        Err(KernelError::Recycling(_))
    ));
}

#[test]
fn divide_by_zero_gives_specials() {
    let out = bigfloat_divide(&[Some("10"), Some("-1"), Some("0")], &[Some("0")]).unwrap();
    assert_eq!(out, strs(&[Some("Inf"), Some("-Inf"), Some("NaN")]));
}

#[test]
fn division_rounds_to_precision() {
    let out = bigfloat_divide(&[Some("1")], &[Some("3")]).unwrap();
    assert_eq!(out, vec![Some(format!("3.{}e-01", "3".repeat(49)))]);
}

#[test]
fn float_modulo_and_pow() {
    assert_eq!(
        bigfloat_modulo(&[Some("7.5"), Some("-7.5"), Some("1")], &[Some("2"), Some("2"), Some("0")]).unwrap(),
        strs(&[Some("1.5e+00"), Some("5e-01"), Some("NaN")])
    );
    assert_eq!(
        bigfloat_pow(&[Some("2"), Some("4"), Some("-8")], &[Some("10"), Some("0.5"), Some("0.5")]).unwrap(),
        strs(&[Some("1.024e+03"), Some("2e+00"), Some("NaN")])
    );
}

#[test]
fn pow_with_huge_exponent_settles_quickly() {
    let start = std::time::Instant::now();
    let out = bigfloat_pow(
        &[Some("2"), Some("2"), Some("-2"), Some("0.5")],
        &[Some("1e100000"), Some("-1e100000"), Some("1000000000000000000001"), Some("1e1000000")],
    )
    .unwrap();
    assert_eq!(out, strs(&[Some("Inf"), Some("0e+00"), Some("-Inf"), Some("0e+00")]));
    assert!(start.elapsed() < std::time::Duration::from_secs(5));
}

#[test]
fn missing_propagates_through_arithmetic() {
    let out = bigfloat_multiply(&[Some("2"), None], &[Some("NaN"), Some("1")]).unwrap();
    assert_eq!(out, strs(&[Some("NaN"), None]));
    assert_eq!(bigfloat_subtract(&[None::<&str>], &[Some("1")]).unwrap(), vec![None]);
}

#[test]
fn sum_and_prod_respect_na_rm() {
    let x = [Some("1"), None, Some("3")];
    assert_eq!(bigfloat_sum(&x, false), vec![None]);
    assert_eq!(bigfloat_sum(&x, true), strs(&[Some("4e+00")]));
    assert_eq!(bigfloat_prod(&[Some("0.5"), Some("4")], false), strs(&[Some("2e+00")]));
    assert_eq!(bigfloat_sum(&[Some("Inf"), Some("-Inf")], false), strs(&[Some("NaN")]));
}

#[test]
fn cumulative_functions() {
    assert_eq!(
        bigfloat_cumsum(&[Some("1"), None, Some("3")]),
        strs(&[Some("1e+00"), None, None])
    );
    assert_eq!(
        bigfloat_cumprod(&[Some("2"), Some("0.5"), Some("3")]),
        strs(&[Some("2e+00"), Some("1e+00"), Some("3e+00")])
    );
    assert_eq!(
        bigfloat_cummax(&[Some("1"), Some("-Inf"), Some("2.5")]),
        strs(&[Some("1e+00"), Some("1e+00"), Some("2.5e+00")])
    );
    assert_eq!(
        bigfloat_cummin(&[Some("1"), Some("NaN"), Some("-3")]),
        strs(&[Some("1e+00"), Some("NaN"), Some("NaN")])
    );
}

#[test]
fn compare_and_rank() {
    assert_eq!(bigfloat_compare(&[None::<&str>], &[None::<&str>], true).unwrap(), vec![Some(0)]);
    assert_eq!(bigfloat_compare(&[None::<&str>], &[None::<&str>], false).unwrap(), vec![None]);
    assert_eq!(
        bigfloat_compare(&[Some("0.1"), Some("NaN"), Some("-Inf")], &[Some("0.10"), Some("1"), Some("-1e99")], false)
            .unwrap(),
        vec![Some(0), Some(1), Some(-1)]
    );
    assert_eq!(
        bigfloat_rank(&[Some("3"), Some("1"), Some("1"), Some("2")]),
        vec![Some(4), Some(1), Some(1), Some(3)]
    );
}

#[test]
fn format_modes() {
    let x = [Some("3.14159"), Some("-0.000123"), None];
    assert_eq!(
        bigfloat_format(&x, "dec", Some(2), false).unwrap(),
        strs(&[Some("3.14"), Some("0.00"), None])
    );
    assert_eq!(
        bigfloat_format(&x, "sci", Some(3), true).unwrap(),
        strs(&[Some("3.14e+00"), Some("-1.23e-04"), None])
    );
    assert_eq!(
        bigfloat_format(&x, "dec", None, false).unwrap(),
        strs(&[Some("3.14159"), Some("-0.000123"), None])
    );
    assert!(matches!(bigfloat_format(&x, "dec", Some(-1), false), Err(KernelError::InvalidArguments(_))));
    assert!(matches!(bigfloat_format(&x, "sci", Some(0), true), Err(KernelError::InvalidArguments(_))));
    assert!(matches!(bigfloat_format(&x, "eng", None, false), Err(KernelError::InvalidArguments(_))));
}

#[test]
fn narrowing_conversions() {
    assert_eq!(
        bigfloat_to_integer(&[Some("2.9"), Some("-2.9"), Some("1e10"), Some("NaN"), None]),
        vec![Some(2), Some(-2), None, None, None]
    );
    assert_eq!(
        bigfloat_to_logical(&[Some("0"), Some("0.5"), Some("NaN"), None]),
        vec![Some(false), Some(true), None, None]
    );
    let d = bigfloat_to_double(&[Some("0.1"), Some("-Inf"), None]);
    assert_eq!(d[0], Some(0.1));
    assert_eq!(d[1], Some(f64::NEG_INFINITY));
    assert_eq!(d[2], None);
}

#[test]
fn rounding_functions() {
    let x = [Some("-2.5"), Some("2.5"), None];
    assert_eq!(bigfloat_floor(&x), strs(&[Some("-3e+00"), Some("2e+00"), None]));
    assert_eq!(bigfloat_ceiling(&x), strs(&[Some("-2e+00"), Some("3e+00"), None]));
    assert_eq!(bigfloat_trunc(&x), strs(&[Some("-2e+00"), Some("2e+00"), None]));
    assert_eq!(bigfloat_abs(&x), strs(&[Some("2.5e+00"), Some("2.5e+00"), None]));
    assert_eq!(bigfloat_sign(&[Some("-2.5"), Some("0"), Some("NaN")]), strs(&[Some("-1e+00"), Some("0e+00"), Some("NaN")]));
}

#[test]
fn transcendental_functions_match_f64() {
    let x = [Some("0.5"), Some("2")];
    let tol = 1e-14;
    assert_strings_close(&bigfloat_exp(&x), &[Some(0.5f64.exp()), Some(2f64.exp())], tol);
    assert_strings_close(&bigfloat_expm1(&x), &[Some(0.5f64.exp_m1()), Some(2f64.exp_m1())], tol);
    assert_strings_close(&bigfloat_log(&x), &[Some(0.5f64.ln()), Some(2f64.ln())], tol);
    assert_strings_close(&bigfloat_log10(&x), &[Some(0.5f64.log10()), Some(2f64.log10())], tol);
    assert_strings_close(&bigfloat_log2(&x), &[Some(-1.0), Some(1.0)], tol);
    assert_strings_close(&bigfloat_log1p(&x), &[Some(0.5f64.ln_1p()), Some(2f64.ln_1p())], tol);
    assert_strings_close(&bigfloat_sqrt(&x), &[Some(0.5f64.sqrt()), Some(2f64.sqrt())], tol);
    assert_strings_close(&bigfloat_sin(&x), &[Some(0.5f64.sin()), Some(2f64.sin())], tol);
    assert_strings_close(&bigfloat_cos(&x), &[Some(0.5f64.cos()), Some(2f64.cos())], tol);
    assert_strings_close(&bigfloat_tan(&x), &[Some(0.5f64.tan()), Some(2f64.tan())], tol);
    assert_strings_close(&bigfloat_sinh(&x), &[Some(0.5f64.sinh()), Some(2f64.sinh())], tol);
    assert_strings_close(&bigfloat_cosh(&x), &[Some(0.5f64.cosh()), Some(2f64.cosh())], tol);
    assert_strings_close(&bigfloat_tanh(&x), &[Some(0.5f64.tanh()), Some(2f64.tanh())], tol);
    assert_strings_close(&bigfloat_asinh(&x), &[Some(0.5f64.asinh()), Some(2f64.asinh())], tol);
    assert_strings_close(&bigfloat_atan(&x), &[Some(0.5f64.atan()), Some(2f64.atan())], tol);
    assert_strings_close(&bigfloat_asin(&x), &[Some(0.5f64.asin()), Some(f64::NAN)], tol);
    assert_strings_close(&bigfloat_acos(&x), &[Some(0.5f64.acos()), Some(f64::NAN)], tol);
    assert_strings_close(&bigfloat_acosh(&x), &[Some(f64::NAN), Some(2f64.acosh())], tol);
    assert_strings_close(&bigfloat_atanh(&x), &[Some(0.5f64.atanh()), Some(f64::NAN)], tol);
}

#[test]
fn gamma_family() {
    assert_eq!(bigfloat_gamma(&[Some("5"), Some("0"), None]), strs(&[Some("2.4e+01"), Some("NaN"), None]));
    assert_strings_close(&bigfloat_lgamma(&[Some("0.5")]), &[Some(0.5723649429247001)], 1e-14);
    assert_strings_close(&bigfloat_digamma(&[Some("0.5")]), &[Some(-1.9635100260214235)], 1e-14);
    assert_strings_close(&bigfloat_trigamma(&[Some("1")]), &[Some(1.6449340668482264)], 1e-14);
}

#[test]
fn domain_errors_become_nan() {
    assert_eq!(
        bigfloat_sqrt(&[Some("-1"), Some("0")]),
        strs(&[Some("NaN"), Some("0e+00")])
    );
    assert_eq!(bigfloat_log(&[Some("0"), Some("-1")]), strs(&[Some("-Inf"), Some("NaN")]));
}

#[test]
fn exp_of_log_round_trips() {
    let back = bigfloat_exp(&bigfloat_log(&[Some("7.25")]));
    let v: f64 = back[0].as_deref().unwrap().parse().unwrap();
    assert_close(v, 7.25, 1e-15);
}

#[test]
fn sequences_end_to_end() {
    assert_eq!(
        bigfloat_seq_to_by(&[Some("1")], &[Some("10")], &[Some("3")]).unwrap(),
        strs(&[Some("1e+00"), Some("4e+00"), Some("7e+00"), Some("1e+01")])
    );
    assert_eq!(
        bigfloat_seq_to_lo(&[Some("0")], &[Some("1")], &[Some(5)]).unwrap(),
        strs(&[Some("0e+00"), Some("2.5e-01"), Some("5e-01"), Some("7.5e-01"), Some("1e+00")])
    );
    assert_eq!(
        bigfloat_seq_by_lo(&[Some("5")], &[Some("-2")], &[Some(3)]).unwrap(),
        strs(&[Some("5e+00"), Some("3e+00"), Some("1e+00")])
    );
    assert!(matches!(
        bigfloat_seq_to_by(&[Some("1")], &[Some("0")], &[Some("1")]),
        Err(KernelError::InvalidArguments(_))
    ));
    assert!(matches!(
        bigfloat_seq_by_lo(&[Some("1")], &[Some("1")], &[None]),
        Err(KernelError::InvalidArguments(_))
    ));
    assert!(matches!(
        bigfloat_seq_to_by(&[Some("3")], &[Some("3")], &[Some("0")]),
        Err(KernelError::InvalidArguments(_))
    ));
}

#[test]
fn seq_to_by_with_astronomical_span_fails_fast() {
    let start = std::time::Instant::now();
    assert!(matches!(
        bigfloat_seq_to_by(&[Some("0")], &[Some("1e12000000000")], &[Some("1")]),
        Err(KernelError::AllocationFailure(_))
    ));
    assert!(start.elapsed() < std::time::Duration::from_secs(5));
}
