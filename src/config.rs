// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling precision policy and resource guards,
//! plus the [`Precision`] setting carried by every float array.

use crate::errors::KernelError;

/// Working precision of float arrays created at the string boundary, in significant
/// decimal digits.
pub const DEFAULT_PRECISION: u32 = 50;

/// Largest accepted working precision.
///
/// The transcendental kernels recompute their constants per call, so very high
/// precisions get expensive quickly.
pub const MAX_PRECISION: u32 = 10_000;

/// Extra digits carried internally by the elementary-function kernels before the
/// final rounding to the array precision.
pub const GUARD_DIGITS: u32 = 10;

/// Upper bound on the decimal exponent of a finite float. Larger results overflow
/// to infinity, smaller ones underflow to zero.
pub const MAX_DECIMAL_EXPONENT: i64 = 1_000_000_000_000_000_000;

/// Results estimated to need more bits than this fail with
/// `KernelError::AllocationFailure` rather than attempting the allocation.
///
/// 2^26 bits is an 8 MiB magnitude, a little over twenty million decimal digits.
pub const MAX_RESULT_BITS: u64 = 1 << 26;

/// Fixed-notation output wider than this many digits falls back to scientific notation.
pub const MAX_FIXED_WIDTH: u64 = 100_000;

/// Token used by `Display` implementations for missing elements.
pub const MISSING_TOKEN: &str = "NA";

/// Working precision of a float array, in significant decimal digits.
///
/// Attached to the array rather than the element, so every element of one array is
/// rounded the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u32);

impl Precision {
    /// Validated constructor, accepting `1..=MAX_PRECISION` digits.
    pub fn new(digits: u32) -> Result<Self, KernelError> {
        if digits == 0 || digits > MAX_PRECISION {
            return Err(KernelError::InvalidArguments(format!(
                "precision must be between 1 and {} digits, got {}",
                MAX_PRECISION, digits
            )));
        }
        Ok(Precision(digits))
    }

    /// Internal constructor for digit counts derived from already-validated settings
    /// or formatting requests.
    #[inline]
    pub(crate) const fn unchecked(digits: u32) -> Self {
        Precision(if digits == 0 { 1 } else { digits })
    }

    #[inline]
    pub fn digits(self) -> u32 {
        self.0
    }

    /// Precision widened by `extra` digits, for intermediate results.
    #[inline]
    pub fn with_guard(self, extra: u32) -> Self {
        Precision(self.0.saturating_add(extra))
    }

    /// The more precise of two settings. Binary kernels produce this precision.
    #[inline]
    pub fn widest(self, other: Self) -> Self {
        self.max(other)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_PRECISION)
    }
}
