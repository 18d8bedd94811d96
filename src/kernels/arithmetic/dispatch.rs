// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arithmetic Dispatch Module** - *Operator Routing for Big-Number Arrays*
//!
//! Validates the operator against the element kind, resolves the recycled output length
//! and null mask, then evaluates each valid position.
//!
//! ## Error model
//! - Unsupported operator for the kind, or incompatible lengths, fail before any work.
//! - An exact integer `%/%` or `%%` by zero aborts the whole call.
//! - Float results never fail: domain problems produce `NaN` and are summarised in a
//!   single warning.

use minarrow::Bitmask;
use tracing::{debug, warn};

use crate::config::Precision;
use crate::errors::KernelError;
use crate::kernels::scientific::constants::ConstantCache;
use crate::kernels::scientific::elementary;
use crate::numeric::{BigFloat, BigInteger};
use crate::operators::ArithmeticOperator;
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};
use crate::utils::{bitmask_from_validity, confirm_recyclable, is_valid, merge_bitmasks_to_new, try_alloc_vec};

/// Walks two recycled operands, calling `f(lhs_idx, rhs_idx)` where both are valid.
///
/// `Ok(None)` from `f` marks the output slot missing; `Err` aborts the call.
pub(crate) fn zip_recycled<T, F>(
    label: &str,
    lhs: (usize, Option<&Bitmask>),
    rhs: (usize, Option<&Bitmask>),
    mut f: F,
) -> Result<(Vec<T>, Option<Bitmask>), KernelError>
where
    T: Default,
    F: FnMut(usize, usize) -> Result<Option<T>, KernelError>,
{
    let (llen, lmask) = lhs;
    let (rlen, rmask) = rhs;
    let len = confirm_recyclable(label, llen, rlen)?;
    let mut data = try_alloc_vec(label, len)?;
    let mut null_mask = merge_bitmasks_to_new(lmask, llen, rmask, rlen, len);
    for i in 0..len {
        if !is_valid(null_mask.as_ref(), i) {
            data.push(T::default());
            continue;
        }
        match f(i % llen, i % rlen)? {
            Some(v) => data.push(v),
            None => {
                data.push(T::default());
                null_mask
                    .get_or_insert_with(|| Bitmask::new_set_all(len, true))
                    .set(i, false);
            }
        }
    }
    Ok((data, null_mask))
}

#[inline]
fn int_element(op: ArithmeticOperator, a: &BigInteger, b: &BigInteger) -> Result<BigInteger, KernelError> {
    match op {
        ArithmeticOperator::Add => Ok(a + b),
        ArithmeticOperator::Subtract => Ok(a - b),
        ArithmeticOperator::Multiply => Ok(a * b),
        ArithmeticOperator::Quotient => a.quotient(b),
        ArithmeticOperator::Modulo => a.modulo(b),
        ArithmeticOperator::Divide | ArithmeticOperator::Power => Err(unsupported("biginteger", op)),
    }
}

#[inline]
fn float_element(
    op: ArithmeticOperator,
    a: &BigFloat,
    b: &BigFloat,
    prec: Precision,
    consts: &ConstantCache,
) -> Result<BigFloat, KernelError> {
    match op {
        ArithmeticOperator::Add => Ok(a.add(b, prec)),
        ArithmeticOperator::Subtract => Ok(a.sub(b, prec)),
        ArithmeticOperator::Multiply => Ok(a.mul(b, prec)),
        ArithmeticOperator::Divide => Ok(a.div(b, prec)),
        ArithmeticOperator::Modulo => Ok(a.modulo(b, prec)),
        ArithmeticOperator::Power => Ok(elementary::pow(a, b, prec, consts)),
        ArithmeticOperator::Quotient => Err(unsupported("bigfloat", op)),
    }
}

fn unsupported(kind: &str, op: ArithmeticOperator) -> KernelError {
    KernelError::InvalidArguments(format!("{}: operator '{}' is not supported", kind, op.name()))
}

/// Element-wise integer arithmetic under recycling.
///
/// Supports `Add`, `Subtract`, `Multiply`, `Quotient` and `Modulo`. Integer powers take
/// native exponents through [`pow_biginteger`].
///
/// # Errors
/// - `InvalidArguments` for `Divide` or `Power`.
/// - `Recycling` for incompatible lengths.
/// - `DivideByZero` if any valid pair has a zero divisor under `Quotient` or `Modulo`.
pub fn apply_biginteger(
    lhs: &BigIntegerArray,
    rhs: &BigIntegerArray,
    op: ArithmeticOperator,
) -> Result<BigIntegerArray, KernelError> {
    if matches!(op, ArithmeticOperator::Divide | ArithmeticOperator::Power) {
        return Err(unsupported("biginteger", op));
    }
    debug!(op = op.name(), lhs = lhs.len(), rhs = rhs.len(), "apply_biginteger");
    let (data, null_mask) = zip_recycled(
        op.name(),
        (lhs.len(), lhs.null_mask()),
        (rhs.len(), rhs.null_mask()),
        |li, ri| int_element(op, &lhs.data[li], &rhs.data[ri]).map(Some),
    )?;
    Ok(BigIntegerArray { data, null_mask })
}

/// Raises each integer to a recycled native exponent.
///
/// Negative exponents have an integer result only for bases `1` and `-1`; every other
/// such slot becomes missing and the count is reported once.
///
/// # Errors
/// `Recycling` for incompatible lengths; `AllocationFailure` when a result would exceed
/// `MAX_RESULT_BITS`.
pub fn pow_biginteger(lhs: &BigIntegerArray, exponents: &[Option<i32>]) -> Result<BigIntegerArray, KernelError> {
    let exp_mask = bitmask_from_validity(exponents.iter().map(Option::is_some), exponents.len());
    let mut non_integer = 0usize;
    let (data, null_mask) = zip_recycled(
        "pow",
        (lhs.len(), lhs.null_mask()),
        (exponents.len(), exp_mask.as_ref()),
        |li, ri| {
            let e = exponents[ri].unwrap_or_default();
            let r = lhs.data[li].pow_i32(e)?;
            non_integer += r.is_none() as usize;
            Ok(r)
        },
    )?;
    if non_integer > 0 {
        warn!(non_integer, "pow_biginteger: non-integer results set to missing");
    }
    Ok(BigIntegerArray { data, null_mask })
}

/// Element-wise float arithmetic under recycling.
///
/// The result carries the wider of the two operand precisions. `Quotient` is rejected;
/// every other operator is total, with `NaN` for undefined results.
pub fn apply_bigfloat(
    lhs: &BigFloatArray,
    rhs: &BigFloatArray,
    op: ArithmeticOperator,
) -> Result<BigFloatArray, KernelError> {
    if op == ArithmeticOperator::Quotient {
        return Err(unsupported("bigfloat", op));
    }
    let precision = lhs.precision.widest(rhs.precision);
    debug!(
        op = op.name(),
        lhs = lhs.len(),
        rhs = rhs.len(),
        precision = precision.digits(),
        "apply_bigfloat"
    );
    let consts = ConstantCache::new();
    let mut produced_nan = 0usize;
    let (data, null_mask) = zip_recycled(
        op.name(),
        (lhs.len(), lhs.null_mask()),
        (rhs.len(), rhs.null_mask()),
        |li, ri| {
            let (a, b) = (&lhs.data[li], &rhs.data[ri]);
            let v = float_element(op, a, b, precision, &consts)?;
            if v.is_nan() && !a.is_nan() && !b.is_nan() {
                produced_nan += 1;
            }
            Ok(Some(v))
        },
    )?;
    if produced_nan > 0 {
        warn!(op = op.name(), produced_nan, "apply_bigfloat: NaNs produced");
    }
    Ok(BigFloatArray {
        data,
        null_mask,
        precision,
    })
}
