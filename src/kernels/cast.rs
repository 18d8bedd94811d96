// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cast Kernels** - *Narrowing to Native Arrow Arrays*
//!
//! Converts arbitrary-precision arrays to minarrow `BooleanArray`, `IntegerArray<i32>`
//! and `FloatArray<f64>`. Values that do not fit the target become null; the number of
//! such slots is reported once per call.
//!
//! `i32::MIN` is reserved as the host's missing-integer marker, so the representable
//! range is `(i32::MIN, i32::MAX]`.

use std::marker::PhantomData;

use minarrow::{Bitmask, BooleanArray, FloatArray, IntegerArray, Vec64, vec64};
use tracing::warn;

use crate::numeric::{BigFloat, BigInteger};
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};
use crate::utils::bitmask_from_validity;

/// Applies `f` to every valid slot. A `None` from `f` nulls the slot.
///
/// Returns the values, the output mask, and how many valid inputs `f` rejected.
fn narrow<A, T, F>(arr: &A, fill: T, mut f: F) -> (Vec64<T>, Option<Bitmask>, usize)
where
    A: MaskedBigArray,
    T: Copy,
    F: FnMut(&A::Element) -> Option<T>,
{
    let n = arr.len();
    let mut out = vec64![fill; n];
    let mut validity = Vec::with_capacity(n);
    let mut rejected = 0usize;
    for i in 0..n {
        let v = match arr.get(i) {
            Some(x) => {
                let r = f(x);
                rejected += r.is_none() as usize;
                r
            }
            None => None,
        };
        if let Some(v) = v {
            out[i] = v;
        }
        validity.push(v.is_some());
    }
    (out, bitmask_from_validity(validity, n), rejected)
}

fn to_bool_array(values: Vec64<bool>, null_mask: Option<Bitmask>) -> BooleanArray<()> {
    let len = values.len();
    let mut data = Bitmask::new_set_all(len, false);
    for (i, &b) in values.iter().enumerate() {
        if b {
            data.set(i, true);
        }
    }
    BooleanArray {
        data,
        null_mask,
        len,
        _phantom: PhantomData,
    }
}

/// `i32` in the host-representable range, i.e. excluding `i32::MIN`.
#[inline]
fn host_i32(v: i64) -> Option<i32> {
    i32::try_from(v).ok().filter(|&x| x != i32::MIN)
}

/// Zero is `false`, anything else `true`.
pub fn biginteger_to_logical(arr: &BigIntegerArray) -> BooleanArray<()> {
    let (values, mask, _) = narrow(arr, false, |x| Some(!x.is_zero()));
    to_bool_array(values, mask)
}

/// Exact conversion; out-of-range values become null with a single warning.
pub fn biginteger_to_integer(arr: &BigIntegerArray) -> IntegerArray<i32> {
    let (data, null_mask, overflow) = narrow(arr, 0i32, |x: &BigInteger| x.to_i32().ok());
    if overflow > 0 {
        warn!(overflow, "biginteger_to_integer: values outside the 32-bit integer range set to missing");
    }
    IntegerArray {
        data: data.into(),
        null_mask,
    }
}

/// Nearest double; magnitudes beyond `f64::MAX` saturate to infinity.
pub fn biginteger_to_double(arr: &BigIntegerArray) -> FloatArray<f64> {
    let (data, null_mask, _) = narrow(arr, 0.0f64, |x: &BigInteger| Some(x.to_f64()));
    FloatArray {
        data: data.into(),
        null_mask,
    }
}

/// Zero is `false`, other numbers and infinities `true`, NaN is null.
pub fn bigfloat_to_logical(arr: &BigFloatArray) -> BooleanArray<()> {
    let (values, mask, _) = narrow(arr, false, |x: &BigFloat| (!x.is_nan()).then(|| !x.is_zero()));
    to_bool_array(values, mask)
}

/// Truncates toward zero. NaN, infinities and out-of-range values become null;
/// only the out-of-range count is reported.
pub fn bigfloat_to_integer(arr: &BigFloatArray) -> IntegerArray<i32> {
    let mut overflow = 0usize;
    let (data, null_mask, _) = narrow(arr, 0i32, |x: &BigFloat| {
        if !x.is_finite() {
            return None;
        }
        let v = x.trunc().to_i64_exact().and_then(host_i32);
        overflow += v.is_none() as usize;
        v
    });
    if overflow > 0 {
        warn!(overflow, "bigfloat_to_integer: values outside the 32-bit integer range set to missing");
    }
    IntegerArray {
        data: data.into(),
        null_mask,
    }
}

/// Nearest double. NaN stays NaN rather than null.
pub fn bigfloat_to_double(arr: &BigFloatArray) -> FloatArray<f64> {
    let (data, null_mask, _) = narrow(arr, 0.0f64, |x: &BigFloat| Some(x.to_f64()));
    FloatArray {
        data: data.into(),
        null_mask,
    }
}
