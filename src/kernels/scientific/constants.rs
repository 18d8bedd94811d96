// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Constants Computed at Working Precision*
//!
//! π, ln 2, ln 10 and the even Bernoulli numbers, evaluated to whatever precision a
//! kernel asks for. Values are computed with fixed-point `BigInt` series and cached in a
//! [`ConstantCache`] owned by a single kernel call, so a vector of elements pays for
//! each constant once. Nothing is shared between calls.

use core::cell::RefCell;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::config::Precision;
use crate::numeric::BigFloat;

/// Extra fixed-point digits absorbing the truncation error of each series term.
const SERIES_GUARD: u32 = 20;

/// `atan(1/k)` scaled by `scale`, via the alternating Gregory series.
fn atan_inv(k: u64, scale: &BigInt) -> BigInt {
    let k2 = BigInt::from(k) * BigInt::from(k);
    let mut power = scale / BigInt::from(k);
    let mut sum = power.clone();
    let mut n = 1u64;
    loop {
        power = &power / &k2;
        if power.is_zero() {
            break;
        }
        let term = &power / BigInt::from(2 * n + 1);
        if n % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        n += 1;
    }
    sum
}

/// `atanh(1/k)` scaled by `scale`; all terms are positive.
fn atanh_inv(k: u64, scale: &BigInt) -> BigInt {
    let k2 = BigInt::from(k) * BigInt::from(k);
    let mut power = scale / BigInt::from(k);
    let mut sum = power.clone();
    let mut n = 1u64;
    loop {
        power = &power / &k2;
        if power.is_zero() {
            break;
        }
        sum += &power / BigInt::from(2 * n + 1);
        n += 1;
    }
    sum
}

fn fixed_scale(prec: Precision) -> (BigInt, u32) {
    let w = prec.digits() + SERIES_GUARD;
    (num_traits::pow(BigInt::from(10u32), w as usize), w)
}

/// π by Machin's formula `π = 16 atan(1/5) - 4 atan(1/239)`.
pub fn compute_pi(prec: Precision) -> BigFloat {
    let (scale, w) = fixed_scale(prec);
    let v = atan_inv(5, &scale) * 16u32 - atan_inv(239, &scale) * 4u32;
    BigFloat::from_scaled(v, -(w as i128), prec)
}

/// ln 2 = 2 atanh(1/3).
pub fn compute_ln2(prec: Precision) -> BigFloat {
    let (scale, w) = fixed_scale(prec);
    let v = atanh_inv(3, &scale) * 2u32;
    BigFloat::from_scaled(v, -(w as i128), prec)
}

/// ln 10 = 3 ln 2 + ln(5/4), with ln(5/4) = 2 atanh(1/9).
pub fn compute_ln10(prec: Precision) -> BigFloat {
    let (scale, w) = fixed_scale(prec);
    let v = atanh_inv(3, &scale) * 6u32 + atanh_inv(9, &scale) * 2u32;
    BigFloat::from_scaled(v, -(w as i128), prec)
}

/// Even Bernoulli numbers `B_2, B_4, ..., B_2n` as reduced fractions.
///
/// Uses the tangent numbers `T_k = tan^(2k-1)(0)`, which are integers and can be
/// built in place without fractions, then
/// `B_2k = (-1)^(k-1) 2k T_k / (2^2k (2^2k - 1))`.
pub fn bernoulli_even(n: usize) -> Vec<(BigInt, BigInt)> {
    if n == 0 {
        return Vec::new();
    }
    let mut t: Vec<BigInt> = vec![BigInt::zero(); n + 1];
    t[1] = BigInt::one();
    for k in 2..=n {
        t[k] = &t[k - 1] * BigInt::from(k - 1);
    }
    for k in 2..=n {
        for j in k..=n {
            t[j] = &t[j - 1] * BigInt::from(j - k) + &t[j] * BigInt::from(j - k + 2);
        }
    }
    (1..=n)
        .map(|k| {
            let four_k: BigInt = BigInt::one() << (2 * k);
            let mut num = &t[k] * BigInt::from(2 * k);
            if k % 2 == 0 {
                num = -num;
            }
            let den = &four_k * (&four_k - 1u32);
            let g = num.gcd(&den);
            (num / &g, den / &g)
        })
        .collect()
}

/// Per-call cache of constants, keyed by the precision they were computed at.
///
/// A request at a precision no higher than the cached one is served by rounding the
/// cached value; a higher request recomputes and replaces it.
#[derive(Debug, Default)]
pub struct ConstantCache {
    pi: RefCell<Option<(Precision, BigFloat)>>,
    ln2: RefCell<Option<(Precision, BigFloat)>>,
    ln10: RefCell<Option<(Precision, BigFloat)>>,
    bernoulli: RefCell<Vec<(BigInt, BigInt)>>,
}

fn cached(
    slot: &RefCell<Option<(Precision, BigFloat)>>,
    prec: Precision,
    compute: fn(Precision) -> BigFloat,
) -> BigFloat {
    if let Some((have, v)) = slot.borrow().as_ref() {
        if *have >= prec {
            return v.round_to(prec);
        }
    }
    let v = compute(prec);
    *slot.borrow_mut() = Some((prec, v.clone()));
    v
}

impl ConstantCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pi(&self, prec: Precision) -> BigFloat {
        cached(&self.pi, prec, compute_pi)
    }

    pub fn ln2(&self, prec: Precision) -> BigFloat {
        cached(&self.ln2, prec, compute_ln2)
    }

    pub fn ln10(&self, prec: Precision) -> BigFloat {
        cached(&self.ln10, prec, compute_ln10)
    }

    /// `B_2k` for `k = 1..=n` rounded to `prec`.
    pub fn bernoulli(&self, n: usize, prec: Precision) -> Vec<BigFloat> {
        let needs_more = self.bernoulli.borrow().len() < n;
        if needs_more {
            *self.bernoulli.borrow_mut() = bernoulli_even(n);
        }
        self.bernoulli
            .borrow()
            .iter()
            .take(n)
            .map(|(num, den)| {
                BigFloat::from_bigint(num, prec).div(&BigFloat::from_bigint(den, prec), prec)
            })
            .collect()
    }
}
