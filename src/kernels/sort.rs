// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sorting Algorithms Kernels Module** - *Array Sorting and Ordering Operations*
//!
//! Null-aware ordering for big-number arrays. Missing slots always sort last, whatever
//! the direction. Floats follow the total order `-Inf < finite < Inf < NaN`.
//!
//! Regular sorts here return new arrays.
//! The argsort variants return the indices.

use std::cmp::Ordering;

use minarrow::Bitmask;

use crate::numeric::{BigFloat, BigInteger};
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};
use crate::utils::bitmask_from_validity;

/// Stable argsort by `cmp` with missing slots after every value.
///
/// Equal values keep their input order, so ties can be grouped by scanning the result.
#[inline]
pub fn argsort_masked<A, F>(arr: &A, descending: bool, cmp: F) -> Vec<usize>
where
    A: MaskedBigArray,
    F: Fn(&A::Element, &A::Element) -> Ordering,
{
    let n = arr.len();
    if n == 0 {
        return vec![];
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&i, &j| match (arr.get(i), arr.get(j)) {
        (Some(a), Some(b)) if descending => cmp(b, a),
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    indices
}

/// Indices that would sort an integer array.
pub fn argsort_biginteger(arr: &BigIntegerArray, descending: bool) -> Vec<usize> {
    argsort_masked(arr, descending, |a: &BigInteger, b: &BigInteger| a.cmp(b))
}

/// Indices that would sort a float array under the total order.
pub fn argsort_bigfloat(arr: &BigFloatArray, descending: bool) -> Vec<usize> {
    argsort_masked(arr, descending, |a: &BigFloat, b: &BigFloat| a.total_cmp(b))
}

/// Gathers `indices` from an array, carrying validity along.
fn take<A: MaskedBigArray>(arr: &A, indices: &[usize]) -> (Vec<A::Element>, Option<Bitmask>) {
    let data = indices.iter().map(|&i| arr.data()[i].clone()).collect();
    let mask = arr
        .null_mask()
        .and_then(|_| bitmask_from_validity(indices.iter().map(|&i| !arr.is_null(i)), indices.len()));
    (data, mask)
}

/// Sorted copy of an integer array, missing slots last.
pub fn sorted_biginteger(arr: &BigIntegerArray, descending: bool) -> BigIntegerArray {
    let (data, null_mask) = take(arr, &argsort_biginteger(arr, descending));
    BigIntegerArray { data, null_mask }
}

/// Sorted copy of a float array, missing slots last.
pub fn sorted_bigfloat(arr: &BigFloatArray, descending: bool) -> BigFloatArray {
    let (data, null_mask) = take(arr, &argsort_bigfloat(arr, descending));
    BigFloatArray {
        data,
        null_mask,
        precision: arr.precision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Precision;

    fn floats(values: &[Option<&str>]) -> BigFloatArray {
        BigFloatArray::from_options(
            values.iter().map(|v| v.map(|s| BigFloat::parse_exact(s).unwrap())),
            Precision::new(10).unwrap(),
        )
    }

    #[test]
    fn test_argsort_integers_stable() {
        let arr = BigIntegerArray::from_i64s(&[Some(2), None, Some(1), Some(2)]);
        assert_eq!(argsort_biginteger(&arr, false), vec![2, 0, 3, 1]);
        assert_eq!(argsort_biginteger(&arr, true), vec![0, 3, 2, 1]);
        assert!(argsort_biginteger(&BigIntegerArray::from_i64s(&[]), false).is_empty());
    }

    #[test]
    fn test_argsort_float_total_order() {
        let arr = floats(&[Some("NaN"), Some("1"), None, Some("-Inf"), Some("Inf")]);
        assert_eq!(argsort_bigfloat(&arr, false), vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_sorted_carries_mask() {
        let arr = BigIntegerArray::from_i64s(&[None, Some(3), Some(-1)]);
        let out = sorted_biginteger(&arr, false);
        assert_eq!(out, BigIntegerArray::from_i64s(&[Some(-1), Some(3), None]));
        let dense = sorted_bigfloat(&floats(&[Some("2"), Some("1")]), true);
        assert!(dense.null_mask.is_none());
        assert_eq!(dense.get(0), Some(&BigFloat::from_i64(2)));
    }
}
