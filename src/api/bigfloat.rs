// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Float entry points, parsed at the default precision. Results are rounded to that
//! precision; domain errors show up as `NaN` slots.

use crate::api::{doubles_out, integers_out, logicals_out, notation_arg, scalar_string, to_strings};
use crate::config::Precision;
use crate::errors::KernelError;
use crate::kernels::arithmetic::dispatch::apply_bigfloat;
use crate::kernels::parse::parse_bigfloat;
use crate::kernels::{aggregate, cast, comparison, format, sequence, unary, window};
use crate::operators::{ArithmeticOperator, CumulativeOperator, UnaryFunction};
use crate::structs::BigFloatArray;

#[inline]
fn parse<S: AsRef<str>>(x: &[Option<S>]) -> BigFloatArray {
    parse_bigfloat(x, Precision::default())
}

/// Normalises literals to canonical form at the default precision.
pub fn bigfloat<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    to_strings(&parse(x))
}

pub fn bigfloat_to_logical<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<bool>> {
    logicals_out(&cast::bigfloat_to_logical(&parse(x)))
}

pub fn bigfloat_to_integer<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<i32>> {
    integers_out(&cast::bigfloat_to_integer(&parse(x)))
}

pub fn bigfloat_to_double<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<f64>> {
    doubles_out(&cast::bigfloat_to_double(&parse(x)))
}

/// Formats in `"dec"` or `"sci"` notation.
///
/// `digits` counts decimal places, or significant figures when `is_sigfig` is set.
/// `None` gives the shortest exact rendering.
///
/// # Errors
/// `InvalidArguments` for an unknown notation, negative `digits`, or zero significant figures.
pub fn bigfloat_format<S: AsRef<str>>(
    x: &[Option<S>],
    notation: &str,
    digits: Option<i32>,
    is_sigfig: bool,
) -> Result<Vec<Option<String>>, KernelError> {
    let notation = notation_arg(notation)?;
    let digits = digits
        .map(|d| {
            u32::try_from(d)
                .map_err(|_| KernelError::InvalidArguments(format!("format: 'digits' must be non-negative, got {}", d)))
        })
        .transpose()?;
    format::format_bigfloat(&parse(x), notation, digits, is_sigfig)
}

pub fn bigfloat_compare<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
    na_equal: bool,
) -> Result<Vec<Option<i32>>, KernelError> {
    Ok(integers_out(&comparison::compare_bigfloat(&parse(lhs), &parse(rhs), na_equal)?))
}

pub fn bigfloat_rank<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<i32>> {
    integers_out(&window::rank_bigfloat(&parse(x)))
}

fn binary<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
    op: ArithmeticOperator,
) -> Result<Vec<Option<String>>, KernelError> {
    Ok(to_strings(&apply_bigfloat(&parse(lhs), &parse(rhs), op)?))
}

pub fn bigfloat_add<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Add)
}

pub fn bigfloat_subtract<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Subtract)
}

pub fn bigfloat_multiply<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Multiply)
}

/// Division by zero gives a signed infinity, `0/0` gives `NaN`.
pub fn bigfloat_divide<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Divide)
}

pub fn bigfloat_pow<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Power)
}

/// Floored modulus; a zero divisor gives `NaN`.
pub fn bigfloat_modulo<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Modulo)
}

pub fn bigfloat_sum<S: AsRef<str>>(x: &[Option<S>], na_rm: bool) -> Vec<Option<String>> {
    scalar_string(aggregate::sum_bigfloat(&parse(x), na_rm))
}

pub fn bigfloat_prod<S: AsRef<str>>(x: &[Option<S>], na_rm: bool) -> Vec<Option<String>> {
    scalar_string(aggregate::prod_bigfloat(&parse(x), na_rm))
}

fn cumulative<S: AsRef<str>>(x: &[Option<S>], op: CumulativeOperator) -> Vec<Option<String>> {
    to_strings(&window::cumulative_bigfloat(&parse(x), op))
}

pub fn bigfloat_cumsum<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Sum)
}

pub fn bigfloat_cumprod<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Product)
}

pub fn bigfloat_cummax<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Max)
}

pub fn bigfloat_cummin<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Min)
}

macro_rules! unary_entry_points {
    ($($name:ident => $func:ident),* $(,)?) => {
        $(
            pub fn $name<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
                to_strings(&unary::unary_bigfloat(&parse(x), UnaryFunction::$func))
            }
        )*
    };
}

unary_entry_points! {
    bigfloat_abs => Abs,
    bigfloat_sign => Sign,
    bigfloat_sqrt => Sqrt,
    bigfloat_ceiling => Ceiling,
    bigfloat_floor => Floor,
    bigfloat_trunc => Trunc,
    bigfloat_exp => Exp,
    bigfloat_expm1 => Expm1,
    bigfloat_log => Log,
    bigfloat_log10 => Log10,
    bigfloat_log2 => Log2,
    bigfloat_log1p => Log1p,
    bigfloat_cos => Cos,
    bigfloat_cosh => Cosh,
    bigfloat_sin => Sin,
    bigfloat_sinh => Sinh,
    bigfloat_tan => Tan,
    bigfloat_tanh => Tanh,
    bigfloat_acos => Acos,
    bigfloat_acosh => Acosh,
    bigfloat_asin => Asin,
    bigfloat_asinh => Asinh,
    bigfloat_atan => Atan,
    bigfloat_atanh => Atanh,
    bigfloat_gamma => Gamma,
    bigfloat_lgamma => Lgamma,
    bigfloat_digamma => Digamma,
    bigfloat_trigamma => Trigamma,
}

pub fn bigfloat_seq_to_by<S: AsRef<str>>(
    from: &[Option<S>],
    to: &[Option<S>],
    by: &[Option<S>],
) -> Result<Vec<Option<String>>, KernelError> {
    Ok(to_strings(&sequence::seq_to_by_bigfloat(&parse(from), &parse(to), &parse(by))?))
}

pub fn bigfloat_seq_to_lo<S: AsRef<str>>(
    from: &[Option<S>],
    to: &[Option<S>],
    length_out: &[Option<i32>],
) -> Result<Vec<Option<String>>, KernelError> {
    Ok(to_strings(&sequence::seq_to_lo_bigfloat(&parse(from), &parse(to), length_out)?))
}

pub fn bigfloat_seq_by_lo<S: AsRef<str>>(
    from: &[Option<S>],
    by: &[Option<S>],
    length_out: &[Option<i32>],
) -> Result<Vec<Option<String>>, KernelError> {
    Ok(to_strings(&sequence::seq_by_lo_bigfloat(&parse(from), &parse(by), length_out)?))
}
