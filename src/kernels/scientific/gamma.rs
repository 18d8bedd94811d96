// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gamma Family** - *Γ, ln|Γ|, ψ and ψ₁ at Working Precision*
//!
//! All four functions share one plan: shift the argument upward by the recurrence until
//! the Stirling series with Bernoulli coefficients converges to the working precision,
//! then undo the shift. Negative arguments go through the reflection formulas with
//! `sin(πx)` reduced exactly, so the poles at non-positive integers are detected exactly.

use num_bigint::BigInt;

use crate::config::Precision;
use crate::kernels::scientific::constants::ConstantCache;
use crate::kernels::scientific::elementary::{
    cos_pi, exp, extra_digits, half, int, ln, sin_pi, top, working,
};
use crate::numeric::BigFloat;

/// Integral arguments up to this size use the exact factorial.
const EXACT_FACTORIAL_LIMIT: i64 = 1000;

/// Shift target: from `0.4 D + 10` onward the smallest Stirling term is below `10^-D`.
fn stirling_threshold(w: Precision) -> i64 {
    w.digits() as i64 * 2 / 5 + 10
}

/// Number of unit steps taking `x` (finite, positive) to at least `threshold`.
fn shift_count(x: &BigFloat, threshold: i64) -> i64 {
    let floor = x.floor().to_i64_exact().unwrap_or(threshold);
    (threshold - floor).max(0)
}

/// True at the poles 0, -1, -2, ...
fn is_pole(x: &BigFloat) -> bool {
    x.is_integer() && (x.is_zero() || x.is_negative())
}

/// `Σ_k B_2k / (coeff(k) z^(2k + offset))`, stopping once terms drop below
/// `10^(reference_top - D)`.
fn bernoulli_tail<C>(
    z: &BigFloat,
    offset: i32,
    coeff: C,
    reference_top: i128,
    w: Precision,
    consts: &ConstantCache,
) -> BigFloat
where
    C: Fn(i64) -> i64,
{
    let b = consts.bernoulli(w.digits() as usize + 10, w);
    let one = BigFloat::one();
    let zinv2 = one.div(&z.mul(z, w), w);
    let mut zpow = z.powi(-(2 + offset as i64), w);
    let stop = reference_top - w.digits() as i128 - 2;
    let mut sum = BigFloat::zero();
    for (i, bk) in b.iter().enumerate() {
        let k = i as i64 + 1;
        let term = bk.mul(&zpow, w).div(&int(coeff(k)), w);
        if term.is_zero() || top(&term) < stop {
            break;
        }
        sum = sum.add(&term, w);
        zpow = zpow.mul(&zinv2, w);
    }
    sum
}

/// Product `x (x + 1) ... (x + n - 1)`.
fn rising(x: &BigFloat, n: i64, w: Precision) -> BigFloat {
    (0..n).fold(BigFloat::one(), |acc, i| acc.mul(&x.add(&int(i), w), w))
}

/// ln Γ(x) for finite x > 0.
fn lgamma_positive(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    let base = working(prec).with_guard(5);
    // ln Γ vanishes at 1 and 2; carry the digits lost there.
    let near_root = [1, 2]
        .iter()
        .map(|&r| x.sub(&int(r), base))
        .filter(|d| !d.is_zero())
        .map(|d| extra_digits(-top(&d)))
        .max()
        .unwrap_or(0);
    let w = base.with_guard(near_root);
    let n = shift_count(x, stirling_threshold(w));
    let z = x.add(&int(n), w);

    // (z - 1/2) ln z - z + ln(2π)/2 + Σ B_2k / (2k (2k - 1) z^(2k - 1))
    let lnz = ln(&z, w, consts);
    let two_pi = consts.pi(w).mul(&int(2), w);
    let half_ln_2pi = ln(&two_pi, w, consts).mul(&half(), w);
    let main = z.sub(&half(), w).mul(&lnz, w).sub(&z, w).add(&half_ln_2pi, w);
    let tail = bernoulli_tail(&z, -1, |k| 2 * k * (2 * k - 1), top(&main), w, consts);
    let mut acc = main.add(&tail, w);
    if n > 0 {
        acc = acc.sub(&ln(&rising(x, n, w), w, consts), w);
    }
    acc.round_to(prec)
}

/// ln|Γ(x)|.
///
/// * Poles at non-positive integers return **+∞**, as do both infinities.
/// * `lgamma(1) = lgamma(2) = 0` exactly.
/// * Reflection `ln(π / |sin(πx)|) - ln|Γ(1 - x)|` for x < 0.
/// * Propagates NaN.
pub fn lgamma(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN => return BigFloat::NaN,
        BigFloat::Infinite { .. } => return BigFloat::infinity(false),
        _ => {}
    }
    if is_pole(x) {
        return BigFloat::infinity(false);
    }
    if *x == BigFloat::one() || *x == int(2) {
        return BigFloat::zero();
    }
    if x.is_negative() {
        let w = working(prec).with_guard(5);
        let s = sin_pi(x, w, consts).abs();
        let reflected = ln(&consts.pi(w).div(&s, w), w, consts);
        let one_minus = BigFloat::one().sub(x, w);
        return reflected.sub(&lgamma_positive(&one_minus, w, consts), prec);
    }
    lgamma_positive(x, prec, consts)
}

fn factorial(n: i64) -> BigInt {
    (2..=n).fold(BigInt::from(1), |acc, k| acc * BigInt::from(k))
}

/// Γ(x).
///
/// * `x = n` (positive integer up to 1000) → exact `(n-1)!`, rounded once.
/// * `x > 0` → `exp(ln Γ(x))` with ln Γ carried to extra digits for large results.
/// * `x < 0` → reflection `Γ(x) = π / (sin(πx) Γ(1 - x))`.
/// * `0`, negative integers and `-∞` → NaN; `+∞` → `+∞`.
pub fn gamma(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { negative: true } => return BigFloat::NaN,
        BigFloat::Infinite { negative: false } => return x.clone(),
        _ => {}
    }
    if is_pole(x) {
        return BigFloat::NaN;
    }
    if let Some(n) = x.to_i64_exact() {
        if n <= EXACT_FACTORIAL_LIMIT {
            return BigFloat::from_bigint(&factorial(n - 1), prec);
        }
    }
    let w = working(prec);
    if x.is_negative() {
        let wr = w.with_guard(5);
        let s = sin_pi(x, wr, consts);
        let g = gamma(&BigFloat::one().sub(x, wr), wr, consts);
        return consts.pi(wr).div(&s.mul(&g, wr), prec);
    }
    let l = lgamma_positive(x, w, consts);
    // exp turns the absolute error of ln Γ into relative error.
    let extra = extra_digits(top(&l) + 1);
    let l = if extra > 0 && l.is_finite() {
        lgamma_positive(x, w.with_guard(extra), consts)
    } else {
        l
    };
    exp(&l, prec, consts)
}

/// ψ(x) for finite x > 0: `ψ(z) - Σ 1/(x + i)` with
/// `ψ(z) = ln z - 1/(2z) - Σ B_2k / (2k z^2k)`.
fn digamma_positive(x: &BigFloat, w: Precision, consts: &ConstantCache) -> BigFloat {
    let n = shift_count(x, stirling_threshold(w));
    let z = x.add(&int(n), w);
    let one = BigFloat::one();
    let lnz = ln(&z, w, consts);
    let tail = bernoulli_tail(&z, 0, |k| 2 * k, top(&lnz), w, consts);
    let mut acc = lnz
        .sub(&one.div(&z.mul(&int(2), w), w), w)
        .sub(&tail, w);
    for i in 0..n {
        acc = acc.sub(&one.div(&x.add(&int(i), w), w), w);
    }
    acc
}

/// Digamma ψ(x) = d/dx ln Γ(x).
///
/// Poles and `-∞` give NaN, `+∞` gives `+∞`. Negative arguments use
/// `ψ(x) = ψ(1 - x) - π cos(πx) / sin(πx)`.
pub fn digamma(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { negative: true } => return BigFloat::NaN,
        BigFloat::Infinite { negative: false } => return x.clone(),
        _ => {}
    }
    if is_pole(x) {
        return BigFloat::NaN;
    }
    // ψ crosses zero near 1.46; the guard covers the usual cancellation there.
    let w = working(prec).with_guard(5);
    if x.is_negative() {
        let cot = consts
            .pi(w)
            .mul(&cos_pi(x, w, consts), w)
            .div(&sin_pi(x, w, consts), w);
        let one_minus = BigFloat::one().sub(x, w);
        return digamma_positive(&one_minus, w, consts).sub(&cot, prec);
    }
    digamma_positive(x, w, consts).round_to(prec)
}

/// ψ₁(x) for finite x > 0: `ψ₁(z) + Σ 1/(x + i)²` with
/// `ψ₁(z) = 1/z + 1/(2z²) + Σ B_2k / z^(2k + 1)`.
fn trigamma_positive(x: &BigFloat, w: Precision, consts: &ConstantCache) -> BigFloat {
    let n = shift_count(x, stirling_threshold(w));
    let z = x.add(&int(n), w);
    let one = BigFloat::one();
    let zinv = one.div(&z, w);
    let tail = bernoulli_tail(&z, 1, |_| 1, top(&zinv), w, consts);
    let mut acc = zinv
        .add(&zinv.mul(&zinv, w).mul(&half(), w), w)
        .add(&tail, w);
    for i in 0..n {
        let d = x.add(&int(i), w);
        acc = acc.add(&one.div(&d.mul(&d, w), w), w);
    }
    acc
}

/// Trigamma ψ₁(x) = d²/dx² ln Γ(x).
///
/// Poles give `+∞`, `+∞` gives 0 and `-∞` gives NaN. Negative arguments use
/// `ψ₁(x) = π² / sin²(πx) - ψ₁(1 - x)`.
pub fn trigamma(x: &BigFloat, prec: Precision, consts: &ConstantCache) -> BigFloat {
    match x {
        BigFloat::NaN | BigFloat::Infinite { negative: true } => return BigFloat::NaN,
        BigFloat::Infinite { negative: false } => return BigFloat::zero(),
        _ => {}
    }
    if is_pole(x) {
        return BigFloat::infinity(false);
    }
    let w = working(prec).with_guard(5);
    if x.is_negative() {
        let r = consts.pi(w).div(&sin_pi(x, w, consts), w);
        let one_minus = BigFloat::one().sub(x, w);
        return r
            .mul(&r, w)
            .sub(&trigamma_positive(&one_minus, w, consts), prec);
    }
    trigamma_positive(x, w, consts).round_to(prec)
}
