// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Window Functions Kernels Module** - *Cumulative and Ranking Operations*
//!
//! Positional kernels whose output has the input's length.
//!
//! ## Core Operations
//! - **Cumulative functions**: running sum, product, maximum and minimum. The first
//!   missing slot makes every later slot missing; there is no skip mode.
//! - **Ranking functions**: SQL `RANK()` style, where ties take the lowest rank of their
//!   group. Missing values sort after every value and are ranked too.

use std::cmp::Ordering;

use minarrow::{Bitmask, IntegerArray, vec64};

use crate::kernels::sort::argsort_masked;
use crate::numeric::{BigFloat, BigInteger};
use crate::operators::CumulativeOperator;
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};

// Cumulative kernels

/// Runs `step(acc, value)` over the array until the first missing slot.
///
/// Slots from the first missing one onward hold placeholders under a cleared mask bit.
fn cumulate<A, F>(arr: &A, mut step: F) -> (Vec<A::Element>, Option<Bitmask>)
where
    A: MaskedBigArray,
    F: FnMut(&A::Element, &A::Element) -> A::Element,
{
    let n = arr.len();
    let mut data: Vec<A::Element> = Vec::with_capacity(n);
    let mut first_missing = None;
    for i in 0..n {
        let Some(v) = arr.get(i) else {
            first_missing = Some(i);
            break;
        };
        let next = match data.last() {
            None => v.clone(),
            Some(acc) => step(acc, v),
        };
        data.push(next);
    }
    data.resize(n, A::Element::default());
    let null_mask = first_missing.map(|k| {
        let mut m = Bitmask::new_set_all(n, true);
        for i in k..n {
            m.set(i, false);
        }
        m
    });
    (data, null_mask)
}

/// Running reduction over an integer array; exact.
pub fn cumulative_biginteger(arr: &BigIntegerArray, op: CumulativeOperator) -> BigIntegerArray {
    let (data, null_mask) = cumulate(arr, |acc, v| match op {
        CumulativeOperator::Sum => acc + v,
        CumulativeOperator::Product => acc * v,
        CumulativeOperator::Max => acc.max(v).clone(),
        CumulativeOperator::Min => acc.min(v).clone(),
    });
    BigIntegerArray { data, null_mask }
}

/// Running reduction over a float array, each step rounded to the array precision.
///
/// Once a `NaN` is seen the running maximum and minimum stay `NaN`.
pub fn cumulative_bigfloat(arr: &BigFloatArray, op: CumulativeOperator) -> BigFloatArray {
    let prec = arr.precision;
    let (data, null_mask) = cumulate(arr, |acc, v| match op {
        CumulativeOperator::Sum => acc.add(v, prec),
        CumulativeOperator::Product => acc.mul(v, prec),
        CumulativeOperator::Max | CumulativeOperator::Min if acc.is_nan() || v.is_nan() => BigFloat::NaN,
        CumulativeOperator::Max => {
            if v.total_cmp(acc) == Ordering::Greater { v.clone() } else { acc.clone() }
        }
        CumulativeOperator::Min => {
            if v.total_cmp(acc) == Ordering::Less { v.clone() } else { acc.clone() }
        }
    });
    BigFloatArray {
        data,
        null_mask,
        precision: prec,
    }
}

// Rank kernels

/// Ranks along a stable argsort, so each tie group starts at its lowest position.
#[inline(always)]
fn rank_min<A, F>(arr: &A, cmp: F) -> IntegerArray<i32>
where
    A: MaskedBigArray,
    F: Fn(&A::Element, &A::Element) -> Ordering,
{
    let n = arr.len();
    let indices = argsort_masked(arr, false, &cmp);

    let mut out = vec64![0i32; n];
    let mut rank = 0usize;
    for (pos, &i) in indices.iter().enumerate() {
        let tied = pos > 0
            && match (arr.get(indices[pos - 1]), arr.get(i)) {
                (Some(a), Some(b)) => cmp(a, b) == Ordering::Equal,
                (None, None) => true,
                _ => false,
            };
        if !tied {
            rank = pos + 1;
        }
        out[i] = rank as i32;
    }

    IntegerArray {
        data: out.into(),
        null_mask: None,
    }
}

/// Ranks integers, ties taking the minimum rank.
///
/// ```
/// use bignum_kernels::kernels::window::rank_biginteger;
/// use bignum_kernels::structs::BigIntegerArray;
///
/// let arr = BigIntegerArray::from_i64s(&[Some(3), Some(1), Some(1), Some(2)]);
/// assert_eq!(rank_biginteger(&arr).data.as_slice(), &[4, 1, 1, 3]);
/// ```
pub fn rank_biginteger(arr: &BigIntegerArray) -> IntegerArray<i32> {
    rank_min(arr, |a: &BigInteger, b: &BigInteger| a.cmp(b))
}

/// Ranks floats under `-Inf < finite < Inf < NaN < missing`, ties taking the minimum rank.
pub fn rank_bigfloat(arr: &BigFloatArray) -> IntegerArray<i32> {
    rank_min(arr, |a: &BigFloat, b: &BigFloat| a.total_cmp(b))
}
