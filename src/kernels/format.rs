// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Format Kernels** - *Arrays to Canonical Strings*
//!
//! Renders integer and float arrays in fixed (`dec`) or scientific (`sci`) notation.
//! Missing slots stay `None`; float specials render as `Inf`, `-Inf` and `NaN`.
//!
//! Float digit control follows two modes:
//! - **sigfig** - `digits` counts significant figures.
//! - **decimals** - `digits` counts digits after the decimal point (fixed) or after the
//!   leading mantissa digit (scientific).
//!
//! Rounding to the requested digits is round-half-even. A fixed rendering wider than
//! `MAX_FIXED_WIDTH` characters falls back to scientific notation.

use tracing::debug;

use crate::config::{MAX_FIXED_WIDTH, Precision};
use crate::errors::KernelError;
use crate::numeric::BigFloat;
use crate::numeric::integer::push_exponent;
use crate::operators::Notation;
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};

/// Formats every valid slot as canonical decimal digits or shortest scientific text.
pub fn format_biginteger(arr: &BigIntegerArray, notation: Notation) -> Vec<Option<String>> {
    (0..arr.len())
        .map(|i| {
            arr.get(i).map(|v| match notation {
                Notation::Dec => v.to_string(),
                Notation::Sci => v.to_scientific(),
            })
        })
        .collect()
}

/// Formats a float array.
///
/// `digits = None` gives the shortest text that reproduces each value at the array's
/// precision.
///
/// # Errors
/// `InvalidArguments` when `is_sigfig` is set with zero digits, or when `digits`
/// exceeds `MAX_FIXED_WIDTH`.
pub fn format_bigfloat(
    arr: &BigFloatArray,
    notation: Notation,
    digits: Option<u32>,
    is_sigfig: bool,
) -> Result<Vec<Option<String>>, KernelError> {
    if let Some(d) = digits {
        if is_sigfig && d == 0 {
            return Err(KernelError::InvalidArguments(
                "format_bigfloat: significant figures must be at least 1".into(),
            ));
        }
        if d as u64 > MAX_FIXED_WIDTH {
            return Err(KernelError::InvalidArguments(format!(
                "format_bigfloat: digits {} exceeds the limit of {}",
                d, MAX_FIXED_WIDTH
            )));
        }
    }
    let mut widened = 0usize;
    let out = (0..arr.len())
        .map(|i| {
            arr.get(i).map(|x| {
                let (s, fell_back) = render(x, notation, digits, is_sigfig);
                widened += fell_back as usize;
                s
            })
        })
        .collect();
    if widened > 0 {
        debug!(widened, "format_bigfloat: fixed notation too wide, used scientific");
    }
    Ok(out)
}

/// Formats a single float; see [`format_bigfloat`] for the digit modes.
pub fn format_value(x: &BigFloat, notation: Notation, digits: Option<u32>, is_sigfig: bool) -> String {
    render(x, notation, digits, is_sigfig).0
}

/// Rendered text plus whether a fixed rendering fell back to scientific.
fn render(x: &BigFloat, notation: Notation, digits: Option<u32>, is_sigfig: bool) -> (String, bool) {
    let shown = match (notation, digits) {
        (_, None) => x.clone(),
        (Notation::Sci, Some(d)) => {
            let figures = if is_sigfig { d } else { d.saturating_add(1) };
            x.round_to(Precision::unchecked(figures))
        }
        (Notation::Dec, Some(d)) if is_sigfig => x.round_to(Precision::unchecked(d)),
        (Notation::Dec, Some(d)) => x.round_at_exponent(-(d as i64)),
    };
    let Some((negative, sig, top)) = shown.decimal_digits() else {
        return (shown.to_string(), false);
    };
    match notation {
        Notation::Sci => {
            let width = match digits {
                None => sig.len(),
                Some(d) if is_sigfig => d as usize,
                Some(d) => d as usize + 1,
            };
            (render_sci(negative, &sig, top, width), false)
        }
        Notation::Dec => {
            let frac = match digits {
                None => (sig.len() as i64 - 1).saturating_sub(top).max(0),
                Some(d) if is_sigfig => (d as i64 - 1).saturating_sub(top).max(0),
                Some(d) => d as i64,
            };
            let int_len = top.max(0).saturating_add(1);
            if int_len.saturating_add(frac) > MAX_FIXED_WIDTH as i64 {
                (render_sci(negative, &sig, top, sig.len()), true)
            } else {
                (render_fixed(negative, &sig, top, frac), false)
            }
        }
    }
}

/// `d.ddd e±XX` with the mantissa padded with zeros to `width` digits.
fn render_sci(negative: bool, sig: &str, top: i64, width: usize) -> String {
    let width = width.max(sig.len()).max(1);
    let mut out = String::with_capacity(width + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&sig[..1]);
    if width > 1 {
        out.push('.');
        out.push_str(&sig[1..]);
        out.extend(std::iter::repeat('0').take(width - sig.len()));
    }
    push_exponent(&mut out, top);
    out
}

/// Fixed notation with exactly `frac` fractional digits. Digit `i` of `sig` sits at
/// decimal position `top - i`; positions outside `sig` are zeros.
fn render_fixed(negative: bool, sig: &str, top: i64, frac: i64) -> String {
    let bytes = sig.as_bytes();
    let digit_at = |pos: i64| -> char {
        let idx = top - pos;
        if idx >= 0 && (idx as usize) < bytes.len() {
            bytes[idx as usize] as char
        } else {
            '0'
        }
    };
    let high = top.max(0);
    let mut out = String::with_capacity((high + frac + 3) as usize);
    for pos in (0..=high).rev() {
        out.push(digit_at(pos));
    }
    if frac > 0 {
        out.push('.');
        for k in 1..=frac {
            out.push(digit_at(-k));
        }
    }
    // "-0.00" collapses to "0.00"
    if negative && out.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.insert(0, '-');
    }
    out
}
