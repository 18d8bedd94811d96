// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Integer entry points. Every big-valued argument is parsed leniently, so a bad
//! literal becomes a missing slot rather than an error.

use crate::api::{doubles_out, integers_out, logicals_out, notation_arg, scalar_string, to_strings};
use crate::errors::KernelError;
use crate::kernels::arithmetic::dispatch::{apply_biginteger, pow_biginteger};
use crate::kernels::parse::parse_biginteger;
use crate::kernels::{aggregate, cast, comparison, format, sequence, unary, window};
use crate::operators::{ArithmeticOperator, CumulativeOperator, UnaryFunction};

/// Normalises literals to canonical form.
pub fn biginteger<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    to_strings(&parse_biginteger(x))
}

pub fn biginteger_to_logical<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<bool>> {
    logicals_out(&cast::biginteger_to_logical(&parse_biginteger(x)))
}

pub fn biginteger_to_integer<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<i32>> {
    integers_out(&cast::biginteger_to_integer(&parse_biginteger(x)))
}

pub fn biginteger_to_double<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<f64>> {
    doubles_out(&cast::biginteger_to_double(&parse_biginteger(x)))
}

/// Formats in `"dec"` or `"sci"` notation.
pub fn biginteger_format<S: AsRef<str>>(x: &[Option<S>], notation: &str) -> Result<Vec<Option<String>>, KernelError> {
    let notation = notation_arg(notation)?;
    Ok(format::format_biginteger(&parse_biginteger(x), notation))
}

pub fn biginteger_compare<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
    na_equal: bool,
) -> Result<Vec<Option<i32>>, KernelError> {
    let out = comparison::compare_biginteger(&parse_biginteger(lhs), &parse_biginteger(rhs), na_equal)?;
    Ok(integers_out(&out))
}

pub fn biginteger_rank<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<i32>> {
    integers_out(&window::rank_biginteger(&parse_biginteger(x)))
}

fn binary<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
    op: ArithmeticOperator,
) -> Result<Vec<Option<String>>, KernelError> {
    let out = apply_biginteger(&parse_biginteger(lhs), &parse_biginteger(rhs), op)?;
    Ok(to_strings(&out))
}

pub fn biginteger_add<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Add)
}

pub fn biginteger_subtract<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Subtract)
}

pub fn biginteger_multiply<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Multiply)
}

/// Raises to native exponents; non-integer results are missing.
pub fn biginteger_pow<S: AsRef<str>>(lhs: &[Option<S>], rhs: &[Option<i32>]) -> Result<Vec<Option<String>>, KernelError> {
    Ok(to_strings(&pow_biginteger(&parse_biginteger(lhs), rhs)?))
}

/// Floored modulus. A zero divisor fails the call.
pub fn biginteger_modulo<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Modulo)
}

/// Floored quotient. A zero divisor fails the call.
pub fn biginteger_quotient<S: AsRef<str>, R: AsRef<str>>(
    lhs: &[Option<S>],
    rhs: &[Option<R>],
) -> Result<Vec<Option<String>>, KernelError> {
    binary(lhs, rhs, ArithmeticOperator::Quotient)
}

pub fn biginteger_sum<S: AsRef<str>>(x: &[Option<S>], na_rm: bool) -> Vec<Option<String>> {
    scalar_string(aggregate::sum_biginteger(&parse_biginteger(x), na_rm))
}

pub fn biginteger_prod<S: AsRef<str>>(x: &[Option<S>], na_rm: bool) -> Vec<Option<String>> {
    scalar_string(aggregate::prod_biginteger(&parse_biginteger(x), na_rm))
}

fn cumulative<S: AsRef<str>>(x: &[Option<S>], op: CumulativeOperator) -> Vec<Option<String>> {
    to_strings(&window::cumulative_biginteger(&parse_biginteger(x), op))
}

pub fn biginteger_cumsum<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Sum)
}

pub fn biginteger_cumprod<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Product)
}

pub fn biginteger_cummax<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Max)
}

pub fn biginteger_cummin<S: AsRef<str>>(x: &[Option<S>]) -> Vec<Option<String>> {
    cumulative(x, CumulativeOperator::Min)
}

fn unary_fn<S: AsRef<str>>(x: &[Option<S>], func: UnaryFunction) -> Result<Vec<Option<String>>, KernelError> {
    Ok(to_strings(&unary::unary_biginteger(&parse_biginteger(x), func)?))
}

pub fn biginteger_abs<S: AsRef<str>>(x: &[Option<S>]) -> Result<Vec<Option<String>>, KernelError> {
    unary_fn(x, UnaryFunction::Abs)
}

pub fn biginteger_sign<S: AsRef<str>>(x: &[Option<S>]) -> Result<Vec<Option<String>>, KernelError> {
    unary_fn(x, UnaryFunction::Sign)
}

pub fn biginteger_seq_to_by<S: AsRef<str>>(
    from: &[Option<S>],
    to: &[Option<S>],
    by: &[Option<S>],
) -> Result<Vec<Option<String>>, KernelError> {
    let out = sequence::seq_to_by_biginteger(&parse_biginteger(from), &parse_biginteger(to), &parse_biginteger(by))?;
    Ok(to_strings(&out))
}

pub fn biginteger_seq_to_lo<S: AsRef<str>>(
    from: &[Option<S>],
    to: &[Option<S>],
    length_out: &[Option<i32>],
) -> Result<Vec<Option<String>>, KernelError> {
    let out = sequence::seq_to_lo_biginteger(&parse_biginteger(from), &parse_biginteger(to), length_out)?;
    Ok(to_strings(&out))
}

pub fn biginteger_seq_by_lo<S: AsRef<str>>(
    from: &[Option<S>],
    by: &[Option<S>],
    length_out: &[Option<i32>],
) -> Result<Vec<Option<String>>, KernelError> {
    let out = sequence::seq_by_lo_biginteger(&parse_biginteger(from), &parse_biginteger(by), length_out)?;
    Ok(to_strings(&out))
}
