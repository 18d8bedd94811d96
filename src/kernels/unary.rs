// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Unary Operations Kernels Module** - *Single-Array Transformations*
//!
//! Element-wise functions over one array with null-aware semantics. Missing slots stay
//! missing; float domain errors produce `NaN` rather than failing the call.
//!
//! ## Core Operations
//! - **Integers**: absolute value and sign, both exact
//! - **Floats**: rounding to integers, square root, exponentials and logarithms,
//!   circular and hyperbolic functions with inverses, and the gamma family

use tracing::{debug, warn};

use crate::config::Precision;
use crate::errors::KernelError;
use crate::kernels::scientific::constants::ConstantCache;
use crate::kernels::scientific::{elementary, gamma};
use crate::numeric::{BigFloat, BigInteger};
use crate::operators::UnaryFunction;
use crate::structs::{BigFloatArray, BigIntegerArray};

/// Applies `abs` or `sign` to every valid integer.
///
/// # Errors
/// `InvalidArguments` for any other function; integers have no transcendental kernels.
pub fn unary_biginteger(arr: &BigIntegerArray, func: UnaryFunction) -> Result<BigIntegerArray, KernelError> {
    let f: fn(&BigInteger) -> BigInteger = match func {
        UnaryFunction::Abs => BigInteger::abs,
        UnaryFunction::Sign => BigInteger::signum,
        other => {
            return Err(KernelError::InvalidArguments(format!(
                "biginteger: unary function {:?} is not supported",
                other
            )));
        }
    };
    Ok(BigIntegerArray {
        data: arr.data.iter().map(f).collect(),
        null_mask: arr.null_mask.clone(),
    })
}

/// Evaluates one function at one value, rounded to `prec`.
pub fn apply_function(func: UnaryFunction, x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match func {
        UnaryFunction::Abs => x.abs(),
        UnaryFunction::Sign => x.signum(),
        UnaryFunction::Ceiling => x.ceil().round_to(prec),
        UnaryFunction::Floor => x.floor().round_to(prec),
        UnaryFunction::Trunc => x.trunc(),
        UnaryFunction::Sqrt => x.sqrt(prec),
        UnaryFunction::Exp => elementary::exp(x, prec, consts),
        UnaryFunction::Expm1 => elementary::expm1(x, prec, consts),
        UnaryFunction::Log => elementary::ln(x, prec, consts),
        UnaryFunction::Log10 => elementary::log10(x, prec, consts),
        UnaryFunction::Log2 => elementary::log2(x, prec, consts),
        UnaryFunction::Log1p => elementary::log1p(x, prec, consts),
        UnaryFunction::Cos => elementary::cos(x, prec, consts),
        UnaryFunction::Cosh => elementary::cosh(x, prec, consts),
        UnaryFunction::Sin => elementary::sin(x, prec, consts),
        UnaryFunction::Sinh => elementary::sinh(x, prec, consts),
        UnaryFunction::Tan => elementary::tan(x, prec, consts),
        UnaryFunction::Tanh => elementary::tanh(x, prec, consts),
        UnaryFunction::Acos => elementary::acos(x, prec, consts),
        UnaryFunction::Acosh => elementary::acosh(x, prec, consts),
        UnaryFunction::Asin => elementary::asin(x, prec, consts),
        UnaryFunction::Asinh => elementary::asinh(x, prec, consts),
        UnaryFunction::Atan => elementary::atan(x, prec, consts),
        UnaryFunction::Atanh => elementary::atanh(x, prec, consts),
        UnaryFunction::Gamma => gamma::gamma(x, prec, consts),
        UnaryFunction::Lgamma => gamma::lgamma(x, prec, consts),
        UnaryFunction::Digamma => gamma::digamma(x, prec, consts),
        UnaryFunction::Trigamma => gamma::trigamma(x, prec, consts),
    }
}

/// Applies `func` to every valid float at the array's precision.
///
/// One constant cache serves the whole call. New `NaN`s, from inputs that were not
/// already `NaN`, are counted and reported in a single warning.
pub fn unary_bigfloat(arr: &BigFloatArray, func: UnaryFunction) -> BigFloatArray {
    let prec = arr.precision;
    debug!(func = ?func, len = arr.data.len(), precision = prec.digits(), "unary_bigfloat");
    let consts = ConstantCache::new();
    let mut produced_nan = 0usize;
    let data = arr
        .data
        .iter()
        .enumerate()
        .map(|(i, x)| {
            if arr.null_mask.as_ref().map_or(false, |m| !m.get(i)) {
                return BigFloat::zero();
            }
            let v = apply_function(func, x, prec, &consts);
            if v.is_nan() && !x.is_nan() {
                produced_nan += 1;
            }
            v
        })
        .collect();
    if produced_nan > 0 {
        warn!(func = ?func, produced_nan, "unary_bigfloat: NaNs produced");
    }
    BigFloatArray {
        data,
        null_mask: arr.null_mask.clone(),
        precision: prec,
    }
}
