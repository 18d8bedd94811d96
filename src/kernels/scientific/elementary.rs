// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Elementary Functions** - *Exponential, Logarithmic, Trigonometric and Hyperbolic*
//!
//! Scalar kernels over [`BigFloat`] evaluated to an arbitrary working precision.
//! Every function takes the target [`Precision`] and a per-call [`ConstantCache`],
//! computes internally with `GUARD_DIGITS` extra digits (more where the argument
//! reduction cancels) and rounds once at the end.
//!
//! ## Domain handling
//! Arguments outside a function's real domain return `NaN`; poles return signed
//! infinities. `NaN` propagates through every function.
//!
//! ## Argument reduction
//! - `exp`: `x = n ln 10 + r`, then `r / 2^8` through the Taylor series and eight squarings.
//! - `ln`: `x = y 10^t` with `y` within a decade of one, four square roots, then the
//!   `atanh` series.
//! - `sin`/`cos`/`tan`: remainder modulo π/2 with π carried to as many extra digits as
//!   the argument has integer digits, retried once when the remainder cancels.
//! - `atan`: three half-angle steps `x / (1 + √(1 + x²))` before the Gregory series.

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

use crate::config::{GUARD_DIGITS, MAX_DECIMAL_EXPONENT, MAX_PRECISION, Precision};
use crate::kernels::scientific::constants::ConstantCache;
use crate::numeric::BigFloat;

/// Squarings applied after the exponential series.
const EXP_HALVINGS: u32 = 8;

/// Leading digit position; zero maps far below any real value.
#[inline]
pub(crate) fn top(x: &BigFloat) -> i128 {
    x.leading_exponent().unwrap_or(i128::MIN / 4)
}

/// Non-negative guard digit count, capped to keep runaway requests bounded.
#[inline]
pub(crate) fn extra_digits(n: i128) -> u32 {
    n.clamp(0, 4 * MAX_PRECISION as i128) as u32
}

#[inline]
pub(crate) fn working(prec: Precision) -> Precision {
    prec.with_guard(GUARD_DIGITS)
}

#[inline]
pub(crate) fn int(v: i64) -> BigFloat {
    BigFloat::from_i64(v)
}

#[inline]
pub(crate) fn half() -> BigFloat {
    BigFloat::from_parts(false, BigUint::from(5u32), -1)
}

/// `x × 10^k` without rounding.
fn scale10(x: &BigFloat, k: i128) -> BigFloat {
    match x {
        BigFloat::Finite { mantissa, exponent } => BigFloat::from_parts(
            mantissa.sign() == num_bigint::Sign::Minus,
            mantissa.magnitude().clone(),
            *exponent as i128 + k,
        ),
        other => other.clone(),
    }
}

/// Precision large enough to hold `x mod 2` exactly.
fn exact_fraction_precision(x: &BigFloat) -> Precision {
    match x {
        BigFloat::Finite { exponent, .. } => {
            Precision::unchecked(2 + extra_digits(-(*exponent as i128)))
        }
        _ => Precision::unchecked(2),
    }
}

// Exponential

/// Σ s^k / k! for |s| well below one.
fn exp_series(s: &BigFloat, w: Precision) -> BigFloat {
    let stop = -(w.digits() as i128) - 2;
    let mut sum = BigFloat::one();
    let mut term = BigFloat::one();
    let mut k = 1i64;
    loop {
        term = term.mul(s, w).div(&int(k), w);
        if term.is_zero() || top(&term) < stop {
            break;
        }
        sum = sum.add(&term, w);
        k += 1;
    }
    sum
}

pub fn exp(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN => return BigFloat::NaN,
        BigFloat::Infinite { negative: true } => return BigFloat::zero(),
        BigFloat::Infinite { negative: false } => return BigFloat::infinity(false),
        _ => {}
    }
    if x.is_zero() {
        return BigFloat::one();
    }
    let t = top(x);
    // |x| >= 1e19 leaves the exponent range in either direction.
    if t >= 19 {
        return if x.is_negative() {
            BigFloat::zero()
        } else {
            BigFloat::infinity(false)
        };
    }
    let w = working(prec);
    if t < -(w.digits() as i128) {
        return BigFloat::one().add(x, prec);
    }
    let wr = w.with_guard(extra_digits(t + 3));
    let ln10 = consts.ln10(wr);
    let n = x.div(&ln10, wr).round_at_exponent(0);
    let shift = n
        .to_bigint_exact()
        .and_then(|v| v.to_i128())
        .unwrap_or(0);
    let r = x.sub(&n.mul(&ln10, wr), wr);
    let s = r.div(&int(1 << EXP_HALVINGS), wr);
    let mut y = exp_series(&s, wr);
    for _ in 0..EXP_HALVINGS {
        y = y.mul(&y, wr);
    }
    match y {
        BigFloat::Finite { mantissa, exponent } => {
            BigFloat::from_scaled(mantissa, exponent as i128 + shift, prec)
        }
        other => other,
    }
}

pub fn expm1(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN => return BigFloat::NaN,
        BigFloat::Infinite { negative: true } => return int(-1),
        BigFloat::Infinite { negative: false } => return BigFloat::infinity(false),
        _ => {}
    }
    if x.is_zero() {
        return BigFloat::zero();
    }
    let w = working(prec);
    let t = top(x);
    if t < -(w.digits() as i128) {
        return x.round_to(prec);
    }
    // exp(x) - 1 cancels about -t leading digits.
    let we = w.with_guard(extra_digits(-t));
    exp(x, we, consts).sub(&BigFloat::one(), prec)
}

// Logarithms

/// `u + u³/3 + u⁵/5 + ...`, alternating when `alternate` is set (the Gregory series).
fn odd_power_series(u: &BigFloat, w: Precision, alternate: bool) -> BigFloat {
    if u.is_zero() {
        return BigFloat::zero();
    }
    let u2 = u.mul(u, w);
    let stop = top(u) - w.digits() as i128 - 2;
    let mut power = u.clone();
    let mut sum = u.clone();
    let mut k = 3i64;
    let mut negate = alternate;
    loop {
        power = power.mul(&u2, w);
        let term = power.div(&int(k), w);
        if term.is_zero() || top(&term) < stop {
            break;
        }
        sum = if negate { sum.sub(&term, w) } else { sum.add(&term, w) };
        negate = alternate && !negate;
        k += 2;
    }
    sum
}

/// ln(y) for y within a decade of one.
fn ln_reduced(y: &BigFloat, w: Precision) -> BigFloat {
    let w2 = w.with_guard(3);
    let mut z = y.clone();
    for _ in 0..4 {
        z = z.sqrt(w2);
    }
    let one = BigFloat::one();
    let u = z.sub(&one, w2).div(&z.add(&one, w2), w2);
    // ln y = 16 ln z = 32 atanh(u)
    odd_power_series(&u, w2, false).mul(&int(32), w)
}

pub fn ln(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { negative: true } => return BigFloat::NaN,
        BigFloat::Infinite { negative: false } => return BigFloat::infinity(false),
        _ => {}
    }
    if x.is_zero() {
        return BigFloat::infinity(true);
    }
    if x.is_negative() {
        return BigFloat::NaN;
    }
    let one = BigFloat::one();
    if *x == one {
        return BigFloat::zero();
    }
    let w = working(prec);
    let mut t = top(x);
    let near_one = if t == 0 || t == -1 {
        extra_digits(-top(&x.sub(&one, w)))
    } else {
        0
    };
    let wl = w.with_guard(near_one);
    let mut y = scale10(x, -t);
    // Keep y in [10^-0.5, 10^0.5).
    if y.total_cmp(&BigFloat::from_parts(false, BigUint::from(316_227_766u32), -8)) == Ordering::Greater {
        y = scale10(&y, -1);
        t += 1;
    }
    let ly = ln_reduced(&y, wl);
    if t == 0 {
        return ly.round_to(prec);
    }
    let wt = wl.with_guard(20);
    int(t as i64).mul(&consts.ln10(wt), wt).add(&ly, prec)
}

pub fn log10(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if let BigFloat::Finite { mantissa, exponent } = x {
        if mantissa.is_one() {
            return int(*exponent).round_to(prec);
        }
    }
    let w = working(prec);
    ln(x, w, consts).div(&consts.ln10(w), prec)
}

pub fn log2(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    let w = working(prec);
    ln(x, w, consts).div(&consts.ln2(w), prec)
}

pub fn log1p(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { negative: true } => return BigFloat::NaN,
        BigFloat::Infinite { negative: false } => return BigFloat::infinity(false),
        _ => {}
    }
    if x.is_zero() {
        return BigFloat::zero();
    }
    match x.total_cmp(&int(-1)) {
        Ordering::Less => return BigFloat::NaN,
        Ordering::Equal => return BigFloat::infinity(true),
        Ordering::Greater => {}
    }
    let w = working(prec);
    let t = top(x);
    if t < -(w.digits() as i128) {
        return x.round_to(prec);
    }
    let y = BigFloat::one().add(x, w.with_guard(extra_digits(-t)));
    ln(&y, prec, consts)
}

// Trigonometric

/// Sums `first - first·r²/(a(a+1)) + ...`, the shared shape of the sine and cosine series.
fn trig_series(first: BigFloat, r2: &BigFloat, start: i64, w: Precision) -> BigFloat {
    let stop = top(&first) - w.digits() as i128 - 2;
    let mut term = first.clone();
    let mut sum = first;
    let mut k = start;
    let mut negate = true;
    loop {
        term = term.mul(r2, w).div(&int(k * (k + 1)), w);
        if term.is_zero() || top(&term) < stop {
            break;
        }
        sum = if negate { sum.sub(&term, w) } else { sum.add(&term, w) };
        negate = !negate;
        k += 2;
    }
    sum
}

fn sin_series(r: &BigFloat, w: Precision) -> BigFloat {
    trig_series(r.clone(), &r.mul(r, w), 2, w)
}

fn cos_series(r: &BigFloat, w: Precision) -> BigFloat {
    trig_series(BigFloat::one(), &r.mul(r, w), 1, w)
}

/// Remainder of `x` modulo π/2 and the quadrant `k mod 4`.
///
/// Returns `None` for arguments with more integer digits than `MAX_PRECISION`, where
/// the remainder is meaningless at any supported precision.
fn reduce_half_pi(x: &BigFloat, w: Precision, consts: &ConstantCache) -> Option<(BigFloat, u8)> {
    let t = top(x);
    if t > MAX_PRECISION as i128 {
        return None;
    }
    let mut extra = extra_digits(t + 2);
    let mut retried = false;
    loop {
        let wr = w.with_guard(extra);
        let half_pi = consts.pi(wr).div(&int(2), wr);
        let k = x.div(&half_pi, wr).round_at_exponent(0);
        let r = x.sub(&k.mul(&half_pi, wr), wr);
        let lost = if k.is_zero() || r.is_zero() { 0 } else { -top(&r) };
        if lost <= 0 || retried {
            let quadrant = k
                .to_bigint_exact()
                .map(|v| v.mod_floor(&BigInt::from(4)))
                .and_then(|v| v.to_u8())
                .unwrap_or(0);
            return Some((r.round_to(w), quadrant));
        }
        extra = extra.saturating_add(extra_digits(lost));
        retried = true;
    }
}

pub fn sin(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    let w = working(prec);
    if x.is_zero() || top(x) < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    match reduce_half_pi(x, w, consts) {
        None => BigFloat::NaN,
        Some((r, q)) => {
            let v = match q {
                0 => sin_series(&r, w),
                1 => cos_series(&r, w),
                2 => sin_series(&r, w).neg(),
                _ => cos_series(&r, w).neg(),
            };
            v.round_to(prec)
        }
    }
}

pub fn cos(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    if x.is_zero() {
        return BigFloat::one();
    }
    let w = working(prec);
    match reduce_half_pi(x, w, consts) {
        None => BigFloat::NaN,
        Some((r, q)) => {
            let v = match q {
                0 => cos_series(&r, w),
                1 => sin_series(&r, w).neg(),
                2 => cos_series(&r, w).neg(),
                _ => sin_series(&r, w),
            };
            v.round_to(prec)
        }
    }
}

pub fn tan(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    let w = working(prec);
    if x.is_zero() || top(x) < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    match reduce_half_pi(x, w, consts) {
        None => BigFloat::NaN,
        Some((r, q)) => {
            let s = sin_series(&r, w);
            let c = cos_series(&r, w);
            if q % 2 == 0 {
                s.div(&c, prec)
            } else {
                c.neg().div(&s, prec)
            }
        }
    }
}

/// `x mod 2` folded into `[0, 1/2]`, plus whether sin(πx) changes sign.
fn fold_unit(x: &BigFloat) -> (BigFloat, bool) {
    let exact = exact_fraction_precision(x);
    let one = BigFloat::one();
    let mut r = x.modulo(&int(2), exact);
    let mut negate = false;
    if r.total_cmp(&one) != Ordering::Less {
        r = r.sub(&one, exact);
        negate = true;
    }
    if r.total_cmp(&half()) == Ordering::Greater {
        r = one.sub(&r, exact);
    }
    (r, negate)
}

/// sin(πx) with the argument reduced exactly, so integers give exact zeros.
pub fn sin_pi(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    let w = working(prec);
    if x.is_zero() || top(x) < -(w.digits() as i128) {
        return consts.pi(w).mul(x, prec);
    }
    let (r, negate) = fold_unit(x);
    if r.is_zero() {
        return BigFloat::zero();
    }
    let v = sin(&consts.pi(w).mul(&r, w), prec, consts);
    if negate { v.neg() } else { v }
}

/// cos(πx) = sin(π(x + 1/2)), with the shift applied after exact reduction.
pub fn cos_pi(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    let w = working(prec);
    if x.is_zero() || top(x) < -(w.digits() as i128) {
        return BigFloat::one();
    }
    let exact = exact_fraction_precision(x);
    let r = x.modulo(&int(2), exact).add(&half(), exact.with_guard(1));
    sin_pi(&r, prec, consts)
}

// Inverse trigonometric

/// atan for |x| <= 1: three half-angle steps, then the Gregory series.
fn atan_reduced(x: &BigFloat, w: Precision) -> BigFloat {
    let one = BigFloat::one();
    let mut y = x.clone();
    for _ in 0..3 {
        let root = one.add(&y.mul(&y, w), w).sqrt(w);
        y = y.div(&one.add(&root, w), w);
    }
    odd_power_series(&y, w, true).mul(&int(8), w)
}

fn signed_half_pi(negative: bool, prec: Precision, consts: &ConstantCache) -> BigFloat {
    let w = working(prec);
    let v = consts.pi(w).mul(&half(), prec);
    if negative { v.neg() } else { v }
}

pub fn atan(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN => return BigFloat::NaN,
        BigFloat::Infinite { negative } => return signed_half_pi(*negative, prec, consts),
        _ => {}
    }
    let w = working(prec);
    let t = top(x);
    if x.is_zero() || t < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    let wa = w.with_guard(3);
    let one = BigFloat::one();
    if x.abs().total_cmp(&one) == Ordering::Greater {
        // atan(x) = ±π/2 - atan(1/x)
        let inv = one.div(x, wa);
        let hp = signed_half_pi(x.is_negative(), wa, consts);
        if t > w.digits() as i128 {
            return hp.sub(&inv, prec);
        }
        return hp.sub(&atan_reduced(&inv, wa), prec);
    }
    atan_reduced(x, wa).round_to(prec)
}

pub fn asin(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    let one = BigFloat::one();
    match x.abs().total_cmp(&one) {
        Ordering::Greater => return BigFloat::NaN,
        Ordering::Equal => return signed_half_pi(x.is_negative(), prec, consts),
        Ordering::Less => {}
    }
    let w = working(prec).with_guard(3);
    if x.is_zero() || top(x) < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    // asin x = atan(x / √((1 - x)(1 + x)))
    let d = one.sub(x, w).mul(&one.add(x, w), w).sqrt(w);
    atan(&x.div(&d, w), prec, consts)
}

pub fn acos(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    let one = BigFloat::one();
    match x.abs().total_cmp(&one) {
        Ordering::Greater => return BigFloat::NaN,
        Ordering::Equal if x.is_negative() => return consts.pi(prec),
        Ordering::Equal => return BigFloat::zero(),
        Ordering::Less => {}
    }
    let w = working(prec).with_guard(3);
    // acos x = 2 atan(√((1 - x) / (1 + x)))
    let q = one.sub(x, w).div(&one.add(x, w), w).sqrt(w);
    atan(&q, w, consts).mul(&int(2), prec)
}

// Hyperbolic

pub fn sinh(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { .. } => return x.clone(),
        _ => {}
    }
    let w = working(prec);
    if x.is_zero() || top(x) < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    // sinh |x| = (E + E / (E + 1)) / 2 with E = expm1(|x|)
    let e = expm1(&x.abs(), w, consts);
    let v = if e.is_infinite() {
        e
    } else {
        e.add(&e.div(&e.add(&BigFloat::one(), w), w), w).mul(&half(), prec)
    };
    if x.is_negative() { v.neg() } else { v }
}

pub fn cosh(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN => return BigFloat::NaN,
        BigFloat::Infinite { .. } => return BigFloat::infinity(false),
        _ => {}
    }
    let w = working(prec);
    let e = exp(&x.abs(), w, consts);
    if e.is_infinite() {
        return e;
    }
    e.add(&BigFloat::one().div(&e, w), w).mul(&half(), prec)
}

pub fn tanh(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    let sign = |v: BigFloat| if x.is_negative() { v.neg() } else { v };
    match x {
        BigFloat::NaN => return BigFloat::NaN,
        BigFloat::Infinite { .. } => return sign(BigFloat::one()),
        _ => {}
    }
    let w = working(prec);
    if x.is_zero() || top(x) < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    let ax = x.abs();
    // 1 - tanh|x| ~ 2 e^(-2|x|) vanishes below the working precision.
    let saturation = int(w.digits() as i64 * 115 / 100 + 2);
    if ax.total_cmp(&saturation) == Ordering::Greater {
        return sign(BigFloat::one());
    }
    // tanh |x| = E / (E + 2) with E = expm1(2|x|)
    let e = expm1(&ax.mul(&int(2), w), w, consts);
    sign(e.div(&e.add(&int(2), w), prec))
}

pub fn asinh(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { .. } => return x.clone(),
        _ => {}
    }
    let w = working(prec);
    let t = top(x);
    if x.is_zero() || t < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    let ax = x.abs();
    let v = if t > w.digits() as i128 / 2 + 1 {
        // asinh |x| = ln(2|x|) once x² swamps one
        ln(&ax, w, consts).add(&consts.ln2(w), prec)
    } else {
        // asinh |x| = log1p(|x| + x² / (1 + √(1 + x²)))
        let one = BigFloat::one();
        let x2 = ax.mul(&ax, w);
        let s = ax.add(&x2.div(&one.add(&one.add(&x2, w).sqrt(w), w), w), w);
        log1p(&s, prec, consts)
    };
    if x.is_negative() { v.neg() } else { v }
}

pub fn acosh(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { negative: true } => return BigFloat::NaN,
        BigFloat::Infinite { negative: false } => return x.clone(),
        _ => {}
    }
    let one = BigFloat::one();
    match x.total_cmp(&one) {
        Ordering::Less => return BigFloat::NaN,
        Ordering::Equal => return BigFloat::zero(),
        Ordering::Greater => {}
    }
    let w = working(prec);
    if top(x) > w.digits() as i128 / 2 + 1 {
        return ln(x, w, consts).add(&consts.ln2(w), prec);
    }
    // acosh x = log1p((x - 1) + √((x - 1)(x + 1)))
    let d = x.sub(&one, w);
    let s = d.add(&d.mul(&x.add(&one, w), w).sqrt(w), w);
    log1p(&s, prec, consts)
}

pub fn atanh(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    if !x.is_finite() {
        return BigFloat::NaN;
    }
    let one = BigFloat::one();
    match x.abs().total_cmp(&one) {
        Ordering::Greater => return BigFloat::NaN,
        Ordering::Equal => return BigFloat::infinity(x.is_negative()),
        Ordering::Less => {}
    }
    let w = working(prec);
    if x.is_zero() || top(x) < -(w.digits() as i128) / 2 {
        return x.round_to(prec);
    }
    // atanh x = log1p(2x / (1 - x)) / 2
    let q = x.mul(&int(2), w).div(&one.sub(x, w), w);
    log1p(&q, w, consts).mul(&half(), prec)
}

// Power

/// `x^y` with the host's conventions for the special cases.
///
/// * `x^0 = 1` and `1^y = 1`, even when the other operand is NaN.
/// * Integral `y` that fits `i64` uses exact repeated squaring.
/// * A negative base with a fractional exponent is NaN.
/// * `0^y` is `0` for `y > 0` and `Inf` for `y < 0`.
/// * Otherwise `exp(y ln x)`, with the logarithm carried to as many extra digits as
///   the product has integer digits.
pub fn pow(x: &BigFloat, y: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    let one = BigFloat::one();
    if y.is_zero() || *x == one {
        return one;
    }
    if x.is_nan() || y.is_nan() {
        return BigFloat::NaN;
    }
    if let BigFloat::Infinite { negative } = y {
        return match x.abs().total_cmp(&one) {
            Ordering::Equal => one,
            Ordering::Greater if *negative => BigFloat::zero(),
            Ordering::Greater => BigFloat::infinity(false),
            Ordering::Less if *negative => BigFloat::infinity(false),
            Ordering::Less => BigFloat::zero(),
        };
    }
    if let Some(n) = y.to_i64_exact() {
        return x.powi(n, prec);
    }
    let odd_integral = y.integral_parity();
    if let BigFloat::Infinite { negative } = x {
        if y.is_negative() {
            return BigFloat::zero();
        }
        return BigFloat::infinity(*negative && odd_integral == Some(true));
    }
    if x.is_zero() {
        return if y.is_negative() {
            BigFloat::infinity(false)
        } else {
            BigFloat::zero()
        };
    }
    let negate = if x.is_negative() {
        match odd_integral {
            None => return BigFloat::NaN,
            Some(odd) => odd,
        }
    } else {
        false
    };
    let ax = x.abs();
    // |y ln|x|| of 10^19 or more is past ln(10) * MAX_DECIMAL_EXPONENT either way.
    let coarse = Precision::unchecked(20);
    let estimate = y.mul(&ln(&ax, coarse, consts), coarse);
    let out_of_range = match &estimate {
        BigFloat::Infinite { .. } => true,
        _ => estimate
            .leading_exponent()
            .is_some_and(|e| e > MAX_DECIMAL_EXPONENT.ilog10() as i128),
    };
    if out_of_range {
        return if estimate.is_negative() {
            BigFloat::zero()
        } else {
            BigFloat::infinity(negate)
        };
    }
    let w = working(prec);
    let guess = y.mul(&ln(&ax, w, consts), w);
    let extra = extra_digits(top(&guess) + 1);
    let l = if extra > 0 && guess.is_finite() {
        let wp = w.with_guard(extra);
        y.mul(&ln(&ax, wp, consts), wp)
    } else {
        guess
    };
    let r = exp(&l, prec, consts);
    if negate { r.neg() } else { r }
}
