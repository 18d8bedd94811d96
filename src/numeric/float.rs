// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **BigFloat** - *Arbitrary-Precision Decimal Float*
//!
//! A finite value is `mantissa × 10^exponent` with an exact `BigInt` mantissa. Finite values
//! are kept normalised (no trailing zero digits, zero is `0 × 10^0` and unsigned), so two
//! finite values are numerically equal exactly when they are structurally equal.
//!
//! ## Rounding
//! Every arithmetic method takes the working [`Precision`] of the array it belongs to and
//! rounds its result to that many significant digits, **round-half-even**. Addition,
//! division and square root compute a few guard digits plus a sticky digit, so the single
//! rounding step is correctly rounded.
//!
//! ## Specials
//! `Infinite { negative }` and `NaN` follow IEEE conventions. Missing values are not
//! represented here; they live in the array validity mask.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use regex::Regex;

use crate::config::{GUARD_DIGITS, MAX_DECIMAL_EXPONENT, MAX_RESULT_BITS, Precision};
use crate::errors::KernelError;
use crate::numeric::integer::push_exponent;

const LOG10_2: f64 = core::f64::consts::LOG10_2;

fn float_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([+-]?)(?:([0-9]+)(?:\.([0-9]*))?|\.([0-9]+))(?:[eE]([+-]?[0-9]+))?$")
            .expect("valid float grammar")
    })
}

/// `10^n` as a `BigUint`.
#[inline]
pub(crate) fn pow10(n: u64) -> BigUint {
    num_traits::pow(BigUint::from(10u32), n as usize)
}

/// Number of decimal digits of `m`; zero counts as one digit.
pub(crate) fn digit_count(m: &BigUint) -> u64 {
    if m.is_zero() {
        return 1;
    }
    let bits = m.bits();
    let mut est = ((bits - 1) as f64 * LOG10_2).floor() as u64 + 1;
    // The estimate is off by at most one in either direction.
    if est > 1 && *m < pow10(est - 1) {
        est -= 1;
    } else if *m >= pow10(est) {
        est += 1;
    }
    est
}

/// Drops the lowest `drop` decimal digits of `m`, rounding half to even.
pub(crate) fn round_half_even(m: &BigUint, drop: u64) -> BigUint {
    if drop == 0 {
        return m.clone();
    }
    if drop > digit_count(m) {
        return BigUint::zero();
    }
    let divisor = pow10(drop);
    let (q, r) = m.div_rem(&divisor);
    let twice: BigUint = r << 1u32;
    match twice.cmp(&divisor) {
        Ordering::Less => q,
        Ordering::Greater => q + 1u32,
        Ordering::Equal => {
            if q.is_odd() {
                q + 1u32
            } else {
                q
            }
        }
    }
}

/// Arbitrary-precision decimal floating-point value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BigFloat {
    Finite { mantissa: BigInt, exponent: i64 },
    Infinite { negative: bool },
    NaN,
}

impl Default for BigFloat {
    fn default() -> Self {
        BigFloat::zero()
    }
}

impl BigFloat {
    #[inline]
    pub fn zero() -> Self {
        BigFloat::Finite {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    #[inline]
    pub fn one() -> Self {
        BigFloat::Finite {
            mantissa: BigInt::one(),
            exponent: 0,
        }
    }

    #[inline]
    pub fn infinity(negative: bool) -> Self {
        BigFloat::Infinite { negative }
    }

    /// Builds a normalised finite value from sign, magnitude and exponent, without rounding.
    ///
    /// Exponents past `MAX_DECIMAL_EXPONENT` overflow to infinity or underflow to zero.
    pub(crate) fn from_parts(negative: bool, magnitude: BigUint, exponent: i128) -> Self {
        if magnitude.is_zero() {
            return BigFloat::zero();
        }
        let mut m = magnitude;
        let mut e = exponent;
        let chunk = pow10(16);
        loop {
            let (q, r) = m.div_rem(&chunk);
            if !r.is_zero() {
                break;
            }
            m = q;
            e += 16;
        }
        let ten = BigUint::from(10u32);
        loop {
            let (q, r) = m.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            m = q;
            e += 1;
        }
        if e > MAX_DECIMAL_EXPONENT as i128 {
            return BigFloat::Infinite { negative };
        }
        if e < -(MAX_DECIMAL_EXPONENT as i128) {
            return BigFloat::zero();
        }
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        BigFloat::Finite {
            mantissa: BigInt::from_biguint(sign, m),
            exponent: e as i64,
        }
    }

    /// Builds a finite value rounded to `prec` significant digits.
    pub(crate) fn rounded(negative: bool, magnitude: BigUint, exponent: i128, prec: Precision) -> Self {
        let digits = digit_count(&magnitude);
        let p = prec.digits() as u64;
        if digits > p {
            let drop = digits - p;
            let m = round_half_even(&magnitude, drop);
            return BigFloat::from_parts(negative, m, exponent + drop as i128);
        }
        BigFloat::from_parts(negative, magnitude, exponent)
    }

    /// Builds a value from a signed scaled integer `m × 10^exponent`, rounded to `prec`.
    pub(crate) fn from_scaled(m: BigInt, exponent: i128, prec: Precision) -> Self {
        let (sign, mag) = m.into_parts();
        BigFloat::rounded(sign == Sign::Minus, mag, exponent, prec)
    }

    /// Exact integer value rounded to `prec`.
    pub fn from_bigint(v: &BigInt, prec: Precision) -> Self {
        BigFloat::from_scaled(v.clone(), 0, prec)
    }

    pub fn from_i64(v: i64) -> Self {
        BigFloat::from_parts(v < 0, BigUint::from(v.unsigned_abs()), 0)
    }

    /// Imports a double using its shortest round-trip decimal digits.
    pub fn from_f64(x: f64) -> Self {
        if x.is_nan() {
            return BigFloat::NaN;
        }
        if x.is_infinite() {
            return BigFloat::Infinite {
                negative: x < 0.0,
            };
        }
        let mut buf = ryu::Buffer::new();
        BigFloat::parse_exact(buf.format_finite(x)).unwrap_or(BigFloat::NaN)
    }

    /// Parses a literal without rounding.
    pub fn parse_exact(s: &str) -> Result<Self, KernelError> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "inf" | "+inf" | "infinity" | "+infinity" => return Ok(BigFloat::Infinite { negative: false }),
            "-inf" | "-infinity" => return Ok(BigFloat::Infinite { negative: true }),
            "nan" | "+nan" | "-nan" => return Ok(BigFloat::NaN),
            _ => {}
        }
        let caps = float_literal()
            .captures(s)
            .ok_or_else(|| KernelError::Parse(format!("'{}' is not a numeric literal", s)))?;
        let negative = caps.get(1).map_or(false, |m| m.as_str() == "-");
        let (int_part, frac_part) = match caps.get(4) {
            Some(frac) => ("", frac.as_str()),
            None => (
                caps.get(2).map_or("", |m| m.as_str()),
                caps.get(3).map_or("", |m| m.as_str()),
            ),
        };
        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| KernelError::Parse(format!("'{}' is not a numeric literal", s)))?;
        let exp = match caps.get(5) {
            None => 0i128,
            Some(e) => match e.as_str().parse::<i64>() {
                Ok(v) => v as i128,
                // Saturate: the literal is far outside the exponent range.
                Err(_) if magnitude.is_zero() => 0,
                Err(_) if e.as_str().starts_with('-') => return Ok(BigFloat::zero()),
                Err(_) => return Ok(BigFloat::Infinite { negative }),
            },
        };
        Ok(BigFloat::from_parts(
            negative,
            magnitude,
            exp - frac_part.len() as i128,
        ))
    }

    /// Parses a literal and rounds it to `prec`.
    pub fn parse(s: &str, prec: Precision) -> Result<Self, KernelError> {
        Ok(BigFloat::parse_exact(s)?.round_to(prec))
    }

    // Queries

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, BigFloat::NaN)
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, BigFloat::Infinite { .. })
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, BigFloat::Finite { .. })
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, BigFloat::Finite { mantissa, .. } if mantissa.is_zero())
    }

    /// True for negative finite values and negative infinity.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            BigFloat::Finite { mantissa, .. } => mantissa.is_negative(),
            BigFloat::Infinite { negative } => *negative,
            BigFloat::NaN => false,
        }
    }

    /// True for finite values without a fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, BigFloat::Finite { exponent, .. } if *exponent >= 0)
    }

    /// Decimal position of the leading digit, i.e. `floor(log10(|x|))` for finite nonzero `x`.
    pub(crate) fn leading_exponent(&self) -> Option<i128> {
        match self {
            BigFloat::Finite { mantissa, exponent } if !mantissa.is_zero() => {
                Some(*exponent as i128 + digit_count(mantissa.magnitude()) as i128 - 1)
            }
            _ => None,
        }
    }

    /// The value as an `i64` if it is integral and in range.
    pub fn to_i64_exact(&self) -> Option<i64> {
        match self {
            BigFloat::Finite { mantissa, exponent } if *exponent >= 0 => {
                if *exponent > 19 {
                    return None;
                }
                let scaled = mantissa * BigInt::from_biguint(Sign::Plus, pow10(*exponent as u64));
                scaled.to_i64()
            }
            _ => None,
        }
    }

    /// Exact integer value of an integral float.
    ///
    /// `None` for non-integral values and for integers wider than `MAX_RESULT_BITS`.
    pub fn to_bigint_exact(&self) -> Option<BigInt> {
        match self {
            BigFloat::Finite { mantissa, exponent } if *exponent >= 0 => {
                let max_digits = (MAX_RESULT_BITS as f64 * LOG10_2) as i128;
                if self.leading_exponent().is_some_and(|e| e >= max_digits) {
                    return None;
                }
                Some(mantissa * BigInt::from_biguint(Sign::Plus, pow10(*exponent as u64)))
            }
            _ => None,
        }
    }

    /// `Some(is_odd)` for integral values, read off the representation without
    /// expanding the exponent. A positive exponent means a multiple of ten.
    pub(crate) fn integral_parity(&self) -> Option<bool> {
        match self {
            BigFloat::Finite { mantissa, exponent } if *exponent == 0 => Some(mantissa.is_odd()),
            BigFloat::Finite { exponent, .. } if *exponent > 0 => Some(false),
            _ => None,
        }
    }

    /// Nearest double. Overflow saturates to infinity, underflow to zero.
    pub fn to_f64(&self) -> f64 {
        match self {
            BigFloat::NaN => f64::NAN,
            BigFloat::Infinite { negative: true } => f64::NEG_INFINITY,
            BigFloat::Infinite { negative: false } => f64::INFINITY,
            BigFloat::Finite { mantissa, exponent } => {
                if mantissa.is_zero() {
                    return 0.0;
                }
                let top = self.leading_exponent().unwrap_or(0);
                if top > 330 {
                    return if mantissa.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY };
                }
                if top < -400 {
                    return 0.0;
                }
                format!("{}e{}", mantissa, exponent).parse::<f64>().unwrap_or(f64::NAN)
            }
        }
    }

    // Rounding

    /// Rounds to `prec` significant digits.
    pub fn round_to(&self, prec: Precision) -> Self {
        match self {
            BigFloat::Finite { mantissa, exponent } => {
                BigFloat::from_scaled(mantissa.clone(), *exponent as i128, prec)
            }
            other => other.clone(),
        }
    }

    /// Rounds so that no digit remains below `10^min_exponent`.
    pub(crate) fn round_at_exponent(&self, min_exponent: i64) -> Self {
        match self {
            BigFloat::Finite { mantissa, exponent } if *exponent < min_exponent => {
                let drop = (min_exponent as i128 - *exponent as i128) as u64;
                let m = round_half_even(mantissa.magnitude(), drop);
                BigFloat::from_parts(mantissa.is_negative(), m, min_exponent as i128)
            }
            other => other.clone(),
        }
    }

    // Sign operations

    pub fn neg(&self) -> Self {
        match self {
            BigFloat::Finite { mantissa, exponent } => BigFloat::Finite {
                mantissa: -mantissa,
                exponent: *exponent,
            },
            BigFloat::Infinite { negative } => BigFloat::Infinite {
                negative: !negative,
            },
            BigFloat::NaN => BigFloat::NaN,
        }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() { self.neg() } else { self.clone() }
    }

    /// `-1`, `0` or `1`; NaN stays NaN.
    pub fn signum(&self) -> Self {
        match self {
            BigFloat::NaN => BigFloat::NaN,
            _ if self.is_zero() => BigFloat::zero(),
            _ if self.is_negative() => BigFloat::from_i64(-1),
            _ => BigFloat::one(),
        }
    }

    // Arithmetic

    pub fn add(&self, rhs: &Self, prec: Precision) -> Self {
        match (self, rhs) {
            (BigFloat::NaN, _) | (_, BigFloat::NaN) => BigFloat::NaN,
            (BigFloat::Infinite { negative: a }, BigFloat::Infinite { negative: b }) => {
                if a == b { self.clone() } else { BigFloat::NaN }
            }
            (BigFloat::Infinite { .. }, _) => self.clone(),
            (_, BigFloat::Infinite { .. }) => rhs.clone(),
            (
                BigFloat::Finite { mantissa: am, exponent: ae },
                BigFloat::Finite { mantissa: bm, exponent: be },
            ) => add_finite(am, *ae as i128, bm, *be as i128, prec),
        }
    }

    pub fn sub(&self, rhs: &Self, prec: Precision) -> Self {
        self.add(&rhs.neg(), prec)
    }

    pub fn mul(&self, rhs: &Self, prec: Precision) -> Self {
        match (self, rhs) {
            (BigFloat::NaN, _) | (_, BigFloat::NaN) => BigFloat::NaN,
            (BigFloat::Infinite { .. }, _) | (_, BigFloat::Infinite { .. }) => {
                if self.is_zero() || rhs.is_zero() {
                    BigFloat::NaN
                } else {
                    BigFloat::Infinite {
                        negative: self.is_negative() != rhs.is_negative(),
                    }
                }
            }
            (
                BigFloat::Finite { mantissa: am, exponent: ae },
                BigFloat::Finite { mantissa: bm, exponent: be },
            ) => BigFloat::from_scaled(am * bm, *ae as i128 + *be as i128, prec),
        }
    }

    pub fn div(&self, rhs: &Self, prec: Precision) -> Self {
        let negative = self.is_negative() != rhs.is_negative();
        match (self, rhs) {
            (BigFloat::NaN, _) | (_, BigFloat::NaN) => BigFloat::NaN,
            (BigFloat::Infinite { .. }, BigFloat::Infinite { .. }) => BigFloat::NaN,
            (BigFloat::Infinite { .. }, _) => BigFloat::Infinite { negative },
            (_, BigFloat::Infinite { .. }) => BigFloat::zero(),
            (
                BigFloat::Finite { mantissa: am, exponent: ae },
                BigFloat::Finite { mantissa: bm, exponent: be },
            ) => {
                if bm.is_zero() {
                    if am.is_zero() {
                        return BigFloat::NaN;
                    }
                    return BigFloat::Infinite {
                        negative: am.is_negative(),
                    };
                }
                if am.is_zero() {
                    return BigFloat::zero();
                }
                let da = digit_count(am.magnitude());
                let db = digit_count(bm.magnitude());
                let k = (prec.digits() as u64 + 2 + db).saturating_sub(da);
                let num = am.magnitude() * pow10(k);
                let (mut q, r) = num.div_rem(bm.magnitude());
                let mut e = *ae as i128 - *be as i128 - k as i128;
                if !r.is_zero() {
                    q = q * 10u32 + 1u32;
                    e -= 1;
                }
                BigFloat::rounded(negative, q, e, prec)
            }
        }
    }

    /// Floored modulo `x - floor(x / y) * y`, computed exactly before the final rounding.
    ///
    /// The result is zero or has the sign of `rhs`. `x %% 0` and `±Inf %% y` are NaN;
    /// `x %% ±Inf` is `x` when the signs agree (or `x` is zero), otherwise `±Inf`.
    pub fn modulo(&self, rhs: &Self, prec: Precision) -> Self {
        match (self, rhs) {
            (BigFloat::NaN, _) | (_, BigFloat::NaN) | (BigFloat::Infinite { .. }, _) => BigFloat::NaN,
            (_, BigFloat::Infinite { negative }) => {
                if self.is_zero() || self.is_negative() == *negative {
                    self.clone()
                } else {
                    rhs.clone()
                }
            }
            (
                BigFloat::Finite { mantissa: am, exponent: ae },
                BigFloat::Finite { mantissa: bm, exponent: be },
            ) => {
                if bm.is_zero() {
                    return BigFloat::NaN;
                }
                if am.is_zero() {
                    return BigFloat::zero();
                }
                let e = (*ae).min(*be);
                if *ae >= *be {
                    // x' = am * 10^(ae-e) can be enormous; reduce 10^(ae-e) modulo y' first.
                    let modulus = bm.abs();
                    let scale = BigInt::from(10u32).modpow(&BigInt::from(*ae - e), &modulus);
                    let r = (am * scale).mod_floor(bm);
                    BigFloat::from_scaled(r, e as i128, prec)
                } else {
                    // |x| has a lower leading digit position than y only if it is smaller,
                    // except when y's mantissa is short; compare before materialising.
                    let xa = self.abs();
                    let ya = rhs.abs();
                    if xa.total_cmp(&ya) == Ordering::Less {
                        if self.is_negative() == rhs.is_negative() {
                            self.round_to(prec)
                        } else {
                            self.add(rhs, prec)
                        }
                    } else {
                        let shift = (*be - e) as u64;
                        let y = bm * BigInt::from_biguint(Sign::Plus, pow10(shift));
                        BigFloat::from_scaled(am.mod_floor(&y), e as i128, prec)
                    }
                }
            }
        }
    }

    /// Integral power by repeated squaring at a widened precision.
    pub fn powi(&self, n: i64, prec: Precision) -> Self {
        if n == 0 {
            return BigFloat::one();
        }
        let wp = prec.with_guard(GUARD_DIGITS + 20);
        let mut base = self.clone();
        let mut acc = BigFloat::one();
        let mut k = n.unsigned_abs();
        while k > 0 {
            if k & 1 == 1 {
                acc = acc.mul(&base, wp);
            }
            k >>= 1;
            if k > 0 {
                base = base.mul(&base, wp);
            }
        }
        if n < 0 {
            BigFloat::one().div(&acc, prec)
        } else {
            acc.round_to(prec)
        }
    }

    pub fn sqrt(&self, prec: Precision) -> Self {
        match self {
            BigFloat::NaN => BigFloat::NaN,
            BigFloat::Infinite { negative: true } => BigFloat::NaN,
            BigFloat::Infinite { negative: false } => self.clone(),
            BigFloat::Finite { mantissa, exponent } => {
                if mantissa.is_zero() {
                    return BigFloat::zero();
                }
                if mantissa.is_negative() {
                    return BigFloat::NaN;
                }
                let d = digit_count(mantissa.magnitude());
                let mut k = (2 * (prec.digits() as u64 + 2)).saturating_sub(d);
                if (*exponent as i128 - k as i128).rem_euclid(2) == 1 {
                    k += 1;
                }
                let n = mantissa.magnitude() * pow10(k);
                let mut s = n.sqrt();
                let mut e = (*exponent as i128 - k as i128) / 2;
                if &s * &s != n {
                    s = s * 10u32 + 1u32;
                    e -= 1;
                }
                BigFloat::rounded(false, s, e, prec)
            }
        }
    }

    pub fn trunc(&self) -> Self {
        self.to_integral(|_, _| false)
    }

    pub fn floor(&self) -> Self {
        self.to_integral(|negative, inexact| negative && inexact)
    }

    pub fn ceil(&self) -> Self {
        self.to_integral(|negative, inexact| !negative && inexact)
    }

    /// Truncates toward zero, then steps the magnitude up by one when `bump` says so.
    fn to_integral<F: Fn(bool, bool) -> bool>(&self, bump: F) -> Self {
        match self {
            BigFloat::Finite { mantissa, exponent } if *exponent < 0 => {
                let negative = mantissa.is_negative();
                let drop = exponent.unsigned_abs();
                let (q, inexact) = if drop > digit_count(mantissa.magnitude()) {
                    (BigUint::zero(), true)
                } else {
                    let (q, r) = mantissa.magnitude().div_rem(&pow10(drop));
                    (q, !r.is_zero())
                };
                let q = if bump(negative, inexact) { q + 1u32 } else { q };
                BigFloat::from_parts(negative, q, 0)
            }
            other => other.clone(),
        }
    }

    // Ordering

    /// Total order: `-Inf < finite < +Inf < NaN`; NaN equals NaN.
    ///
    /// Sorting and ranking rely on NaN collating after `+Inf` as a single value.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BigFloat::NaN, BigFloat::NaN) => Ordering::Equal,
            (BigFloat::NaN, _) => Ordering::Greater,
            (_, BigFloat::NaN) => Ordering::Less,
            (BigFloat::Infinite { negative: a }, BigFloat::Infinite { negative: b }) => b.cmp(a),
            (BigFloat::Infinite { negative }, _) => {
                if *negative { Ordering::Less } else { Ordering::Greater }
            }
            (_, BigFloat::Infinite { negative }) => {
                if *negative { Ordering::Greater } else { Ordering::Less }
            }
            (
                BigFloat::Finite { mantissa: am, exponent: ae },
                BigFloat::Finite { mantissa: bm, exponent: be },
            ) => {
                let sa = am.signum();
                let sb = bm.signum();
                if sa != sb {
                    return sa.cmp(&sb);
                }
                if am.is_zero() {
                    return Ordering::Equal;
                }
                let ta = self.leading_exponent().unwrap_or(0);
                let tb = other.leading_exponent().unwrap_or(0);
                let by_magnitude = if ta != tb {
                    ta.cmp(&tb)
                } else {
                    let e = (*ae).min(*be);
                    let ma = am.magnitude() * pow10((*ae - e) as u64);
                    let mb = bm.magnitude() * pow10((*be - e) as u64);
                    ma.cmp(&mb)
                };
                if am.is_negative() { by_magnitude.reverse() } else { by_magnitude }
            }
        }
    }

    // Rendering

    /// Sign, significant digits and leading-digit exponent of a finite value.
    pub(crate) fn decimal_digits(&self) -> Option<(bool, String, i64)> {
        match self {
            BigFloat::Finite { mantissa, exponent } => {
                let digits = mantissa.magnitude().to_str_radix(10);
                let top = if mantissa.is_zero() {
                    0
                } else {
                    *exponent + digits.len() as i64 - 1
                };
                Some((mantissa.is_negative(), digits, top))
            }
            _ => None,
        }
    }
}

fn add_finite(am: &BigInt, ae: i128, bm: &BigInt, be: i128, prec: Precision) -> BigFloat {
    if am.is_zero() {
        return BigFloat::from_scaled(bm.clone(), be, prec);
    }
    if bm.is_zero() {
        return BigFloat::from_scaled(am.clone(), ae, prec);
    }
    let ta = ae + digit_count(am.magnitude()) as i128 - 1;
    let tb = be + digit_count(bm.magnitude()) as i128 - 1;
    let ((hm, he, ht), (lm, le, lt)) = if ta >= tb {
        ((am, ae, ta), (bm, be, tb))
    } else {
        ((bm, be, tb), (am, ae, ta))
    };
    // Operands entirely below the rounding window only matter as a sticky digit.
    let floor = he.min(ht - prec.digits() as i128 - 3);
    let sticky;
    let (lm, le) = if lt < floor {
        sticky = lm.signum();
        (&sticky, floor - 1)
    } else {
        (lm, le)
    };
    let e = he.min(le);
    let scale = |m: &BigInt, from: i128| m * BigInt::from_biguint(Sign::Plus, pow10((from - e) as u64));
    BigFloat::from_scaled(scale(hm, he) + scale(lm, le), e, prec)
}

impl FromStr for BigFloat {
    type Err = KernelError;

    /// Parses at the default precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigFloat::parse(s, Precision::default())
    }
}

impl fmt::Display for BigFloat {
    /// Shortest scientific form, e.g. `1.5e+00`, `-Inf`, `NaN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigFloat::NaN => f.write_str("NaN"),
            BigFloat::Infinite { negative: true } => f.write_str("-Inf"),
            BigFloat::Infinite { negative: false } => f.write_str("Inf"),
            BigFloat::Finite { .. } => {
                let (negative, digits, top) = self.decimal_digits().unwrap_or_default();
                let mut out = String::with_capacity(digits.len() + 8);
                if negative {
                    out.push('-');
                }
                out.push_str(&digits[..1]);
                if digits.len() > 1 {
                    out.push('.');
                    out.push_str(&digits[1..]);
                }
                push_exponent(&mut out, top);
                f.write_str(&out)
            }
        }
    }
}
