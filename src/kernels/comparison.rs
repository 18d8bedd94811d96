// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison Operations Kernels Module** - *Three-Way Element-wise Comparison*
//!
//! Compares two recycled arrays slot by slot and reports `-1`, `0` or `1` as an
//! `IntegerArray<i32>`, from which the host derives `==`, `<`, `>=` and friends.
//!
//! ## Null semantics
//! - One side missing: the result is null.
//! - Both sides missing: `0` when `na_equal` is set, otherwise null.
//!
//! Floats compare under the total order `-Inf < finite < Inf < NaN`, so `NaN` equals
//! `NaN` and exceeds every number.

use std::cmp::Ordering;

use minarrow::{IntegerArray, vec64};
use tracing::debug;

use crate::errors::KernelError;
use crate::numeric::{BigFloat, BigInteger};
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};
use crate::utils::{bitmask_from_validity, confirm_recyclable};

fn compare_masked<A, F>(
    label: &str,
    lhs: &A,
    rhs: &A,
    na_equal: bool,
    cmp: F,
) -> Result<IntegerArray<i32>, KernelError>
where
    A: MaskedBigArray,
    F: Fn(&A::Element, &A::Element) -> Ordering,
{
    let (llen, rlen) = (lhs.len(), rhs.len());
    let len = confirm_recyclable(label, llen, rlen)?;
    debug!(kernel = label, lhs = llen, rhs = rlen, na_equal, "compare");

    let mut out = vec64![0i32; len];
    let mut validity = Vec::with_capacity(len);
    for i in 0..len {
        let v = match (lhs.get(i % llen), rhs.get(i % rlen)) {
            (Some(a), Some(b)) => Some(cmp(a, b) as i32),
            (None, None) if na_equal => Some(0),
            _ => None,
        };
        if let Some(v) = v {
            out[i] = v;
        }
        validity.push(v.is_some());
    }

    Ok(IntegerArray {
        data: out.into(),
        null_mask: bitmask_from_validity(validity, len),
    })
}

/// Three-way comparison of two integer arrays under recycling.
///
/// # Errors
/// `Recycling` when neither length divides the other.
pub fn compare_biginteger(
    lhs: &BigIntegerArray,
    rhs: &BigIntegerArray,
    na_equal: bool,
) -> Result<IntegerArray<i32>, KernelError> {
    compare_masked("compare_biginteger", lhs, rhs, na_equal, |a: &BigInteger, b: &BigInteger| {
        a.cmp(b)
    })
}

/// Three-way comparison of two float arrays under recycling. Precisions may differ;
/// values compare exactly.
///
/// # Errors
/// `Recycling` when neither length divides the other.
pub fn compare_bigfloat(
    lhs: &BigFloatArray,
    rhs: &BigFloatArray,
    na_equal: bool,
) -> Result<IntegerArray<i32>, KernelError> {
    compare_masked("compare_bigfloat", lhs, rhs, na_equal, |a: &BigFloat, b: &BigFloat| {
        a.total_cmp(b)
    })
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

    fn options(arr: &IntegerArray<i32>) -> Vec<Option<i32>> {
        (0..arr.data.len())
            .map(|i| match &arr.null_mask {
                Some(m) if !m.get(i) => None,
                _ => Some(arr.data.as_slice()[i]),
            })
            .collect()
    }

    #[test]
    fn test_compare_integers_recycled() {
        let lhs = BigIntegerArray::from_i64s(&[Some(1), Some(5), Some(3), Some(-2)]);
        let rhs = BigIntegerArray::from_i64s(&[Some(3)]);
        let out = compare_biginteger(&lhs, &rhs, false).unwrap();
        assert_eq!(out.data.as_slice(), &[-1, 1, 0, -1]);
        assert!(out.null_mask.is_none());
    }

    #[test]
    fn test_compare_na_equal() {
        let lhs = BigIntegerArray::from_i64s(&[None, None, Some(1)]);
        let rhs = BigIntegerArray::from_i64s(&[None, Some(1), None]);
        assert_eq!(options(&compare_biginteger(&lhs, &rhs, true).unwrap()), vec![Some(0), None, None]);
        assert_eq!(options(&compare_biginteger(&lhs, &rhs, false).unwrap()), vec![None, None, None]);
    }

    #[test]
    fn test_compare_floats_mixed_precision() {
        let lhs = floats(&[Some("0.1"), Some("NaN"), Some("NaN"), Some("-Inf")], 5);
        let rhs = floats(&[Some("0.10"), Some("NaN"), Some("Inf"), Some("-1e999")], 40);
        assert_eq!(
            options(&compare_bigfloat(&lhs, &rhs, false).unwrap()),
            vec![Some(0), Some(0), Some(1), Some(-1)]
        );
    }

    #[test]
    fn test_compare_recycling_error() {
        let a = BigIntegerArray::from_i64s(&[Some(1), Some(2), Some(3)]);
        let b = BigIntegerArray::from_i64s(&[Some(1), Some(2)]);
        assert!(matches!(compare_biginteger(&a, &b, false), Err(KernelError::Recycling(_))));
    }
}
