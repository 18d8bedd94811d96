// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Randomised properties checked against native `i128` arithmetic and against the
//! parser itself. Seeds are fixed so failures reproduce.

mod util;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bignum_kernels::api::biginteger::{biginteger_add, biginteger_compare, biginteger_format, biginteger_multiply};
use bignum_kernels::config::Precision;
use bignum_kernels::kernels::format::format_bigfloat;
use bignum_kernels::kernels::parse::parse_bigfloat;
use bignum_kernels::operators::Notation;
use bignum_kernels::structs::MaskedBigArray;

fn random_digits(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}

fn normalise(sign: &str, digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else if sign == "-" {
        format!("-{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

#[test]
fn integer_format_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut input = Vec::new();
    let mut expect = Vec::new();
    for _ in 0..500 {
        let sign = ["", "+", "-"][rng.gen_range(0..3)];
        let digits = random_digits(&mut rng, 80);
        input.push(Some(format!("{}{}", sign, digits)));
        expect.push(Some(normalise(sign, &digits)));
    }
    assert_eq!(biginteger_format(&input, "dec").unwrap(), expect);
}

#[test]
fn float_round_trip_within_precision() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let prec = Precision::new(rng.gen_range(1..=60)).unwrap();
        let literal = format!(
            "{}{}.{}e{}",
            if rng.gen_bool(0.5) { "-" } else { "" },
            random_digits(&mut rng, 30),
            random_digits(&mut rng, 30),
            rng.gen_range(-400..400)
        );
        let original = parse_bigfloat(&[Some(literal.as_str())], prec);
        for notation in [Notation::Sci, Notation::Dec] {
            let text = format_bigfloat(&original, notation, None, false).unwrap();
            let reparsed = parse_bigfloat(&text, prec);
            assert_eq!(reparsed.get(0), original.get(0), "{} via {:?} ({})", literal, text, notation);
        }
    }
}

#[test]
fn recycled_add_matches_native() {
    let mut rng = StdRng::seed_from_u64(3);
    let lhs: Vec<i64> = (0..12).map(|_| rng.gen_range(-1_000_000_000_000..1_000_000_000_000)).collect();
    let rhs: Vec<i64> = (0..4).map(|_| rng.gen()).collect();
    let as_strings = |v: &[i64]| v.iter().map(|x| Some(x.to_string())).collect::<Vec<_>>();
    let out = biginteger_add(&as_strings(&lhs), &as_strings(&rhs)).unwrap();
    let expect: Vec<Option<String>> = lhs
        .iter()
        .enumerate()
        .map(|(i, &a)| Some((a as i128 + rhs[i % rhs.len()] as i128).to_string()))
        .collect();
    assert_eq!(out, expect);
}

#[test]
fn multiply_matches_native() {
    let mut rng = StdRng::seed_from_u64(5);
    let a: Vec<i64> = (0..64).map(|_| rng.gen()).collect();
    let b: Vec<i64> = (0..64).map(|_| rng.gen()).collect();
    let strings = |v: &[i64]| v.iter().map(|x| Some(x.to_string())).collect::<Vec<_>>();
    let out = biginteger_multiply(&strings(&a), &strings(&b)).unwrap();
    for (i, got) in out.iter().enumerate() {
        assert_eq!(got.as_deref(), Some((a[i] as i128 * b[i] as i128).to_string().as_str()));
    }
}

#[test]
fn compare_matches_native_ordering() {
    let mut rng = StdRng::seed_from_u64(13);
    let a: Vec<i64> = (0..100).map(|_| rng.gen_range(-5..5)).collect();
    let b: Vec<i64> = (0..100).map(|_| rng.gen_range(-5..5)).collect();
    let strings = |v: &[i64]| v.iter().map(|x| Some(x.to_string())).collect::<Vec<_>>();
    let out = biginteger_compare(&strings(&a), &strings(&b), false).unwrap();
    for i in 0..a.len() {
        assert_eq!(out[i], Some(a[i].cmp(&b[i]) as i32));
    }
}
