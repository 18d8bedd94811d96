// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sequence Kernels** - *Arithmetic Progressions*
//!
//! Three ways to describe a progression, each for integers and floats:
//! - `seq_to_by(from, to, by)` steps from `from` by `by` while not passing `to`
//! - `seq_to_lo(from, to, length_out)` spaces `length_out` values evenly from `from` to `to`
//! - `seq_by_lo(from, by, length_out)` takes `length_out` steps of `by` from `from`
//!
//! Parameter arrays are recycled against each other (`length_out` included) and one
//! progression per aligned position is concatenated in order. Any missing or
//! non-finite parameter rejects the call. Output space is reserved up front, so an
//! impossible length fails with `AllocationFailure` instead of aborting.

use num_traits::ToPrimitive;
use tracing::debug;

use crate::config::{GUARD_DIGITS, Precision};
use crate::errors::KernelError;
use crate::numeric::{BigFloat, BigInteger};
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};
use crate::utils::recycled_len;

// Parameter access

fn param<'a, A: MaskedBigArray>(label: &str, name: &str, arr: &'a A, i: usize) -> Result<&'a A::Element, KernelError> {
    arr.get(i % arr.len())
        .ok_or_else(|| KernelError::InvalidArguments(format!("{}: '{}' must not be missing", label, name)))
}

fn finite_param<'a>(label: &str, name: &str, arr: &'a BigFloatArray, i: usize) -> Result<&'a BigFloat, KernelError> {
    let v = param(label, name, arr, i)?;
    if !v.is_finite() {
        return Err(KernelError::InvalidArguments(format!("{}: '{}' must be finite", label, name)));
    }
    Ok(v)
}

fn length_param(label: &str, length_out: &[Option<i32>], i: usize) -> Result<usize, KernelError> {
    match length_out[i % length_out.len()] {
        None => Err(KernelError::InvalidArguments(format!(
            "{}: 'length_out' must not be missing",
            label
        ))),
        Some(n) if n < 0 => Err(KernelError::InvalidArguments(format!(
            "{}: 'length_out' must be a non-negative number, got {}",
            label, n
        ))),
        Some(n) => Ok(n as usize),
    }
}

fn too_long(label: &str) -> KernelError {
    KernelError::AllocationFailure(format!("{}: sequence length does not fit in memory", label))
}

/// Reserves `extra` more slots, failing cleanly on overflow or exhaustion.
fn reserve<T>(label: &str, out: &mut Vec<T>, extra: usize) -> Result<(), KernelError> {
    out.try_reserve(extra).map_err(|e| {
        KernelError::AllocationFailure(format!("{}: cannot reserve {} more elements ({})", label, extra, e))
    })
}

fn zero_step(label: &str) -> KernelError {
    KernelError::InvalidArguments(format!("{}: 'by' must be nonzero", label))
}

fn wrong_sign(label: &str) -> KernelError {
    KernelError::InvalidArguments(format!("{}: wrong sign in 'by' argument", label))
}

// Integer sequences

/// Number of terms `floor((to - from) / by) + 1` of an exact integer progression.
fn int_count(label: &str, from: &BigInteger, to: &BigInteger, by: &BigInteger) -> Result<usize, KernelError> {
    if by.is_zero() {
        return Err(zero_step(label));
    }
    let span = to - from;
    if !span.is_zero() && span.is_negative() != by.is_negative() {
        return Err(wrong_sign(label));
    }
    let steps = span.quotient(by)?;
    steps.as_bigint().to_usize().and_then(|n| n.checked_add(1)).ok_or_else(|| too_long(label))
}

fn push_int_progression(
    label: &str,
    out: &mut Vec<BigInteger>,
    from: &BigInteger,
    by: &BigInteger,
    count: usize,
) -> Result<(), KernelError> {
    reserve(label, out, count)?;
    let mut cur = from.clone();
    for k in 0..count {
        if k > 0 {
            cur = &cur + by;
        }
        out.push(cur.clone());
    }
    Ok(())
}

/// `from, from + by, ...` up to and including `to` when it is reached exactly.
///
/// # Errors
/// `InvalidArguments` for a missing parameter, a zero `by`, or a `by` pointing away
/// from `to`; `Recycling` for incompatible lengths.
pub fn seq_to_by_biginteger(
    from: &BigIntegerArray,
    to: &BigIntegerArray,
    by: &BigIntegerArray,
) -> Result<BigIntegerArray, KernelError> {
    let label = "seq_to_by";
    let n = recycled_len(label, &[from.len(), to.len(), by.len()])?;
    debug!(kernel = label, progressions = n, "biginteger sequence");
    let mut out = Vec::new();
    for i in 0..n {
        let (f, t, b) = (param(label, "from", from, i)?, param(label, "to", to, i)?, param(label, "by", by, i)?);
        let count = int_count(label, f, t, b)?;
        push_int_progression(label, &mut out, f, b, count)?;
    }
    Ok(BigIntegerArray { data: out, null_mask: None })
}

/// `length_out` evenly spaced integers from `from` to `to`.
///
/// # Errors
/// `Domain` when the spacing `(to - from) / (length_out - 1)` is not an integer.
/// `InvalidArguments` for missing parameters, a negative `length_out`, or
/// `length_out == 1` with `from != to`.
pub fn seq_to_lo_biginteger(
    from: &BigIntegerArray,
    to: &BigIntegerArray,
    length_out: &[Option<i32>],
) -> Result<BigIntegerArray, KernelError> {
    let label = "seq_to_lo";
    let n = recycled_len(label, &[from.len(), to.len(), length_out.len()])?;
    debug!(kernel = label, progressions = n, "biginteger sequence");
    let mut out = Vec::new();
    for i in 0..n {
        let (f, t) = (param(label, "from", from, i)?, param(label, "to", to, i)?);
        let lo = length_param(label, length_out, i)?;
        match lo {
            0 => {}
            1 if f == t => push_int_progression(label, &mut out, f, &BigInteger::zero(), 1)?,
            1 => {
                return Err(KernelError::InvalidArguments(format!(
                    "{}: 'from' must equal 'to' when 'length_out' is 1",
                    label
                )));
            }
            _ => {
                let span = t - f;
                let gaps = BigInteger::from((lo - 1) as i64);
                let step = span.quotient(&gaps)?;
                if &step * &gaps != span {
                    return Err(KernelError::Domain(format!(
                        "{}: spacing ({} - {}) / {} is not an integer",
                        label, t, f, gaps
                    )));
                }
                push_int_progression(label, &mut out, f, &step, lo)?;
            }
        }
    }
    Ok(BigIntegerArray { data: out, null_mask: None })
}

/// `length_out` terms `from, from + by, ...`.
pub fn seq_by_lo_biginteger(
    from: &BigIntegerArray,
    by: &BigIntegerArray,
    length_out: &[Option<i32>],
) -> Result<BigIntegerArray, KernelError> {
    let label = "seq_by_lo";
    let n = recycled_len(label, &[from.len(), by.len(), length_out.len()])?;
    debug!(kernel = label, progressions = n, "biginteger sequence");
    let mut out = Vec::new();
    for i in 0..n {
        let (f, b) = (param(label, "from", from, i)?, param(label, "by", by, i)?);
        let lo = length_param(label, length_out, i)?;
        push_int_progression(label, &mut out, f, b, lo)?;
    }
    Ok(BigIntegerArray { data: out, null_mask: None })
}

// Float sequences

/// Term `from + k * step` computed directly, so errors do not accumulate.
#[inline]
fn float_term(from: &BigFloat, step: &BigFloat, k: usize, wide: Precision, prec: Precision) -> BigFloat {
    from.add(&step.mul(&BigFloat::from_i64(k as i64), wide), prec)
}

fn push_float_progression(
    label: &str,
    out: &mut Vec<BigFloat>,
    from: &BigFloat,
    step: &BigFloat,
    count: usize,
    prec: Precision,
) -> Result<(), KernelError> {
    reserve(label, out, count)?;
    let wide = prec.with_guard(GUARD_DIGITS);
    for k in 0..count {
        out.push(float_term(from, step, k, wide, prec));
    }
    Ok(())
}

fn float_count(label: &str, from: &BigFloat, to: &BigFloat, by: &BigFloat, prec: Precision) -> Result<usize, KernelError> {
    if by.is_zero() {
        return Err(zero_step(label));
    }
    let wide = prec.with_guard(GUARD_DIGITS);
    let span = to.sub(from, wide);
    if !span.is_zero() && span.is_negative() != by.is_negative() {
        return Err(wrong_sign(label));
    }
    let steps = span.div(by, wide).floor();
    // A step count with more digits than `usize::MAX` cannot be materialised.
    if steps.leading_exponent().is_some_and(|e| e > usize::MAX.ilog10() as i128) {
        return Err(too_long(label));
    }
    steps
        .to_bigint_exact()
        .and_then(|steps| steps.to_usize())
        .and_then(|steps| steps.checked_add(1))
        .ok_or_else(|| too_long(label))
}

/// Float `from, from + by, ...` not passing `to`, at the widest input precision.
pub fn seq_to_by_bigfloat(
    from: &BigFloatArray,
    to: &BigFloatArray,
    by: &BigFloatArray,
) -> Result<BigFloatArray, KernelError> {
    let label = "seq_to_by";
    let n = recycled_len(label, &[from.len(), to.len(), by.len()])?;
    let prec = from.precision.widest(to.precision).widest(by.precision);
    debug!(kernel = label, progressions = n, precision = prec.digits(), "bigfloat sequence");
    let mut out = Vec::new();
    for i in 0..n {
        let f = finite_param(label, "from", from, i)?;
        let t = finite_param(label, "to", to, i)?;
        let b = finite_param(label, "by", by, i)?;
        let count = float_count(label, f, t, b, prec)?;
        push_float_progression(label, &mut out, f, b, count, prec)?;
    }
    Ok(BigFloatArray { data: out, null_mask: None, precision: prec })
}

/// `length_out` evenly spaced floats; the last term is exactly `to`.
pub fn seq_to_lo_bigfloat(
    from: &BigFloatArray,
    to: &BigFloatArray,
    length_out: &[Option<i32>],
) -> Result<BigFloatArray, KernelError> {
    let label = "seq_to_lo";
    let n = recycled_len(label, &[from.len(), to.len(), length_out.len()])?;
    let prec = from.precision.widest(to.precision);
    debug!(kernel = label, progressions = n, precision = prec.digits(), "bigfloat sequence");
    let wide = prec.with_guard(GUARD_DIGITS);
    let mut out = Vec::new();
    for i in 0..n {
        let f = finite_param(label, "from", from, i)?;
        let t = finite_param(label, "to", to, i)?;
        let lo = length_param(label, length_out, i)?;
        match lo {
            0 => {}
            1 if f.total_cmp(t).is_eq() => push_float_progression(label, &mut out, f, &BigFloat::zero(), 1, prec)?,
            1 => {
                return Err(KernelError::InvalidArguments(format!(
                    "{}: 'from' must equal 'to' when 'length_out' is 1",
                    label
                )));
            }
            _ => {
                let step = t.sub(f, wide).div(&BigFloat::from_i64((lo - 1) as i64), wide);
                push_float_progression(label, &mut out, f, &step, lo - 1, prec)?;
                out.push(t.round_to(prec));
            }
        }
    }
    Ok(BigFloatArray { data: out, null_mask: None, precision: prec })
}

/// `length_out` float terms `from, from + by, ...`.
pub fn seq_by_lo_bigfloat(
    from: &BigFloatArray,
    by: &BigFloatArray,
    length_out: &[Option<i32>],
) -> Result<BigFloatArray, KernelError> {
    let label = "seq_by_lo";
    let n = recycled_len(label, &[from.len(), by.len(), length_out.len()])?;
    let prec = from.precision.widest(by.precision);
    debug!(kernel = label, progressions = n, precision = prec.digits(), "bigfloat sequence");
    let mut out = Vec::new();
    for i in 0..n {
        let f = finite_param(label, "from", from, i)?;
        let b = finite_param(label, "by", by, i)?;
        let lo = length_param(label, length_out, i)?;
        push_float_progression(label, &mut out, f, b, lo, prec)?;
    }
    Ok(BigFloatArray { data: out, null_mask: None, precision: prec })
}
