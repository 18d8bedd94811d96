// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Aggregation Kernels Module** - *Null-Aware Reductions*
//!
//! Sum and product over a whole array.
//!
//! ## Null semantics
//! - `na_rm = false`: any missing slot makes the result missing.
//! - `na_rm = true`: missing slots are skipped.
//! - An empty (or all-skipped) input gives the identity: `0` for sums, `1` for products.
//!
//! Integer reductions are exact. Float reductions accumulate with `GUARD_DIGITS` extra
//! digits and round once to the array precision at the end.

use crate::config::GUARD_DIGITS;
use crate::numeric::{BigFloat, BigInteger};
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};
use crate::traits::dense_iter::DenseIter;

/// Folds the valid values, or returns `None` when a missing slot is not removable.
#[inline]
fn reduce_valid<A, F>(arr: &A, na_rm: bool, init: A::Element, mut f: F) -> Option<A::Element>
where
    A: MaskedBigArray,
    F: FnMut(A::Element, &A::Element) -> A::Element,
{
    if !na_rm && arr.null_count() > 0 {
        return None;
    }
    Some(DenseIter::new(arr.data(), arr.null_mask()).fold(init, |acc, v| f(acc, v)))
}

pub fn sum_biginteger(arr: &BigIntegerArray, na_rm: bool) -> Option<BigInteger> {
    reduce_valid(arr, na_rm, BigInteger::zero(), |acc, v| &acc + v)
}

pub fn prod_biginteger(arr: &BigIntegerArray, na_rm: bool) -> Option<BigInteger> {
    reduce_valid(arr, na_rm, BigInteger::one(), |acc, v| &acc * v)
}

/// Sum at the array precision. `NaN` anywhere, or `Inf + -Inf`, gives `NaN`.
pub fn sum_bigfloat(arr: &BigFloatArray, na_rm: bool) -> Option<BigFloat> {
    let wide = arr.precision.with_guard(GUARD_DIGITS);
    reduce_valid(arr, na_rm, BigFloat::zero(), |acc, v| acc.add(v, wide)).map(|s| s.round_to(arr.precision))
}

/// Product at the array precision. `0 * Inf` gives `NaN`.
pub fn prod_bigfloat(arr: &BigFloatArray, na_rm: bool) -> Option<BigFloat> {
    let wide = arr.precision.with_guard(GUARD_DIGITS);
    reduce_valid(arr, na_rm, BigFloat::one(), |acc, v| acc.mul(v, wide)).map(|p| p.round_to(arr.precision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Precision;

    fn floats(values: &[Option<&str>], digits: u32) -> BigFloatArray {
        BigFloatArray::from_options(
            values.iter().map(|v| v.map(|s| BigFloat::parse_exact(s).unwrap())),
            Precision::new(digits).unwrap(),
        )
    }

    fn f(s: &str) -> BigFloat {
        BigFloat::parse_exact(s).unwrap()
    }

    #[test]
    fn test_integer_sum_prod_na_rm() {
        let arr = BigIntegerArray::from_i64s(&[Some(3), None, Some(-4), Some(5)]);
        assert_eq!(sum_biginteger(&arr, false), None);
        assert_eq!(sum_biginteger(&arr, true), Some(BigInteger::from(4i64)));
        assert_eq!(prod_biginteger(&arr, false), None);
        assert_eq!(prod_biginteger(&arr, true), Some(BigInteger::from(-60i64)));
    }

    #[test]
    fn test_integer_identities() {
        let empty = BigIntegerArray::from_i64s(&[]);
        assert_eq!(sum_biginteger(&empty, false), Some(BigInteger::zero()));
        assert_eq!(prod_biginteger(&empty, false), Some(BigInteger::one()));
        let all_missing = BigIntegerArray::from_i64s(&[None, None]);
        assert_eq!(prod_biginteger(&all_missing, true), Some(BigInteger::one()));
    }

    #[test]
    fn test_integer_product_is_exact() {
        let arr = BigIntegerArray::from_i64s(&(1..=25).map(Some).collect::<Vec<_>>());
        assert_eq!(
            prod_biginteger(&arr, false).unwrap().to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_float_sum_rounds_once() {
        // 0.1 added ten times is exactly 1 in decimal arithmetic
        let arr = floats(&[Some("0.1"); 10], 5);
        assert_eq!(sum_bigfloat(&arr, false), Some(BigFloat::one()));
        let arr = floats(&[Some("1"), Some("1e-12"), Some("-1")], 5);
        assert_eq!(sum_bigfloat(&arr, false), Some(f("1e-12")));
    }

    #[test]
    fn test_float_specials() {
        let arr = floats(&[Some("Inf"), Some("-Inf")], 10);
        assert!(sum_bigfloat(&arr, false).unwrap().is_nan());
        let arr = floats(&[Some("0"), Some("Inf")], 10);
        assert!(prod_bigfloat(&arr, false).unwrap().is_nan());
        let arr = floats(&[Some("2.5"), None, Some("4")], 10);
        assert_eq!(prod_bigfloat(&arr, true), Some(f("10")));
        assert_eq!(prod_bigfloat(&arr, false), None);
        assert_eq!(sum_bigfloat(&floats(&[], 10), false), Some(BigFloat::zero()));
    }
}
