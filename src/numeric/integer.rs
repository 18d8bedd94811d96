// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **BigInteger** - *Exact Signed Integer of Unbounded Magnitude*
//!
//! Thin value type over `num_bigint::BigInt` carrying the semantics the vector kernels
//! need: floored quotient and modulo, guarded powers, canonical text and narrowing
//! conversions. Values are immutable; every operation returns a new integer.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;
use std::sync::OnceLock;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use regex::Regex;

use crate::config::MAX_RESULT_BITS;
use crate::errors::KernelError;

fn decimal_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+-]?)([0-9]+)$").expect("valid integer grammar"))
}

fn hex_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+-]?)0[xX]([0-9a-fA-F]+)$").expect("valid hex grammar"))
}

/// Arbitrary-precision exact integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInteger(BigInt);

impl BigInteger {
    #[inline]
    pub fn zero() -> Self {
        BigInteger(BigInt::zero())
    }

    #[inline]
    pub fn one() -> Self {
        BigInteger(BigInt::one())
    }

    #[inline]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        BigInteger(self.0.abs())
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Self {
        BigInteger(self.0.signum())
    }

    /// Floored quotient, rounding toward negative infinity.
    pub fn quotient(&self, rhs: &Self) -> Result<Self, KernelError> {
        if rhs.is_zero() {
            return Err(KernelError::DivideByZero(format!("{} %/% 0", self)));
        }
        Ok(BigInteger(self.0.div_floor(&rhs.0)))
    }

    /// Floored modulo. The result is zero or has the sign of `rhs`.
    pub fn modulo(&self, rhs: &Self) -> Result<Self, KernelError> {
        if rhs.is_zero() {
            return Err(KernelError::DivideByZero(format!("{} %% 0", self)));
        }
        Ok(BigInteger(self.0.mod_floor(&rhs.0)))
    }

    /// Raises to a native exponent.
    ///
    /// Returns `Ok(None)` when the exact result is not an integer (negative exponent
    /// on a base other than `0`, `1` or `-1`). `0` to a negative power has no value
    /// either and also returns `None`.
    pub fn pow_i32(&self, exp: i32) -> Result<Option<Self>, KernelError> {
        if exp < 0 {
            if self.0.is_one() {
                return Ok(Some(BigInteger::one()));
            }
            if (-&self.0).is_one() {
                let v = if exp % 2 == 0 { BigInt::one() } else { -BigInt::one() };
                return Ok(Some(BigInteger(v)));
            }
            return Ok(None);
        }
        let exp = exp as u32;
        let bits = self.0.bits();
        if bits > 1 && bits.saturating_mul(exp as u64) > MAX_RESULT_BITS {
            return Err(KernelError::AllocationFailure(format!(
                "{}-bit base raised to {} exceeds {} bits",
                bits, exp, MAX_RESULT_BITS
            )));
        }
        Ok(Some(BigInteger(num_traits::pow(self.0.clone(), exp as usize))))
    }

    /// Narrowing conversion to the host's 32-bit integer.
    ///
    /// `i32::MIN` is reserved as the host's missing marker and therefore overflows.
    pub fn to_i32(&self) -> Result<i32, KernelError> {
        match self.0.to_i32() {
            Some(v) if v != i32::MIN => Ok(v),
            _ => Err(KernelError::Overflow(format!("{} does not fit a 32-bit integer", self))),
        }
    }

    /// Nearest double; magnitudes beyond `f64::MAX` become infinite.
    pub fn to_f64(&self) -> f64 {
        // `to_f64` on BigInt is total and rounds to nearest.
        self.0.to_f64().unwrap_or(if self.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    /// Scientific text with the shortest mantissa, e.g. `1.23e+05`.
    pub fn to_scientific(&self) -> String {
        let digits = self.0.magnitude().to_str_radix(10);
        let trimmed = digits.trim_end_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        let exponent = if self.is_zero() { 0 } else { digits.len() as i64 - 1 };
        let mut out = String::with_capacity(trimmed.len() + 6);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&trimmed[..1]);
        if trimmed.len() > 1 {
            out.push('.');
            out.push_str(&trimmed[1..]);
        }
        push_exponent(&mut out, exponent);
        out
    }
}

/// Appends an exponent suffix in the `e+05` style: explicit sign, at least two digits.
pub(crate) fn push_exponent(out: &mut String, exponent: i64) {
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    let mag = exponent.unsigned_abs();
    if mag < 10 {
        out.push('0');
    }
    out.push_str(&mag.to_string());
}

impl FromStr for BigInteger {
    type Err = KernelError;

    /// Parses `[+-]digits` or `[+-]0x hexdigits`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, digits, radix) = if let Some(c) = decimal_literal().captures(s) {
            (c.get(1), c.get(2), 10)
        } else if let Some(c) = hex_literal().captures(s) {
            (c.get(1), c.get(2), 16)
        } else {
            return Err(KernelError::Parse(format!("'{}' is not an integer literal", s)));
        };
        let digits = digits.map(|m| m.as_str()).unwrap_or_default();
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
            .ok_or_else(|| KernelError::Parse(format!("'{}' is not an integer literal", s)))?;
        let negative = sign.map_or(false, |m| m.as_str() == "-");
        Ok(BigInteger(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<BigInt> for BigInteger {
    fn from(v: BigInt) -> Self {
        BigInteger(v)
    }
}

impl From<i64> for BigInteger {
    fn from(v: i64) -> Self {
        BigInteger(BigInt::from(v))
    }
}

impl From<i32> for BigInteger {
    fn from(v: i32) -> Self {
        BigInteger(BigInt::from(v))
    }
}

impl<'a> Add<&'a BigInteger> for &'a BigInteger {
    type Output = BigInteger;
    fn add(self, rhs: &'a BigInteger) -> BigInteger {
        BigInteger(&self.0 + &rhs.0)
    }
}

impl<'a> Sub<&'a BigInteger> for &'a BigInteger {
    type Output = BigInteger;
    fn sub(self, rhs: &'a BigInteger) -> BigInteger {
        BigInteger(&self.0 - &rhs.0)
    }
}

impl<'a> Mul<&'a BigInteger> for &'a BigInteger {
    type Output = BigInteger;
    fn mul(self, rhs: &'a BigInteger) -> BigInteger {
        BigInteger(&self.0 * &rhs.0)
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;
    fn neg(self) -> BigInteger {
        BigInteger(-&self.0)
    }
}

impl BigInteger {
    /// Sign of the value as a `num_bigint::Sign`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.0.sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_canonicalises() {
        assert_eq!(int("  -000123 ").to_string(), "-123");
        assert_eq!(int("+42").to_string(), "42");
        assert_eq!(int("-0").to_string(), "0");
        assert_eq!(int("0xff").to_string(), "255");
        assert_eq!(int("-0X10").to_string(), "-16");
    }

    #[test]
    fn test_parse_rejects() {
        for bad in ["", "1.5", "1e3", "abc", "--1", "0x", "NA"] {
            assert!(bad.parse::<BigInteger>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_floored_division() {
        assert_eq!(int("7").quotient(&int("2")).unwrap(), int("3"));
        assert_eq!(int("-7").quotient(&int("2")).unwrap(), int("-4"));
        assert_eq!(int("-7").modulo(&int("2")).unwrap(), int("1"));
        assert_eq!(int("7").modulo(&int("-2")).unwrap(), int("-1"));
        assert!(matches!(
            int("10").quotient(&BigInteger::zero()),
            Err(KernelError::DivideByZero(_))
        ));
    }

    #[test]
    fn test_pow() {
        assert_eq!(int("2").pow_i32(100).unwrap().unwrap().to_string(), "1267650600228229401496703205376");
        assert_eq!(int("-1").pow_i32(-3).unwrap().unwrap(), int("-1"));
        assert_eq!(int("1").pow_i32(-3).unwrap().unwrap(), int("1"));
        assert_eq!(int("2").pow_i32(-1).unwrap(), None);
        assert_eq!(int("5").pow_i32(0).unwrap().unwrap(), int("1"));
        assert!(matches!(
            int("12345678901234567890").pow_i32(i32::MAX),
            Err(KernelError::AllocationFailure(_))
        ));
    }

    #[test]
    fn test_pow_refuses_results_past_bit_budget() {
        // 2^100_000_000 would be a 12 MiB magnitude.
        assert!(matches!(int("2").pow_i32(100_000_000), Err(KernelError::AllocationFailure(_))));
        assert!(matches!(int("-10").pow_i32(30_000_000), Err(KernelError::AllocationFailure(_))));
        assert_eq!(int("10").pow_i32(1_000).unwrap().unwrap().to_string().len(), 1_001);
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(int("2147483647").to_i32().unwrap(), i32::MAX);
        assert!(int("-2147483648").to_i32().is_err());
        assert!(int("2147483648").to_i32().is_err());
        assert_eq!(int("-12").to_f64(), -12.0);
    }

    #[test]
    fn test_scientific() {
        assert_eq!(int("123000").to_scientific(), "1.23e+05");
        assert_eq!(int("-7").to_scientific(), "-7e+00");
        assert_eq!(int("0").to_scientific(), "0e+00");
        assert_eq!(int("10").to_scientific(), "1e+01");
    }
}
