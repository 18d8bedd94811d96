// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null-Mask, Recycling and Allocation Helpers*
//!
//! Helpers shared by the vectorised kernels: validity bitmask construction and merging,
//! the recycling rule for unequal operand lengths, and fallible output allocation.

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// True when slot `i` is valid under an optional mask.
#[inline(always)]
pub fn is_valid(mask: Option<&Bitmask>, i: usize) -> bool {
    mask.map_or(true, |m| m.get(i))
}

/// Number of null slots in the first `len` positions of an optional mask.
#[inline]
pub fn count_nulls(mask: Option<&Bitmask>, len: usize) -> usize {
    match mask {
        None => 0,
        Some(m) => (0..len).filter(|&i| !m.get(i)).count(),
    }
}

/// Builds a validity mask from per-slot flags. Returns `None` when every slot is valid,
/// so dense results stay mask-free.
pub fn bitmask_from_validity<I: IntoIterator<Item = bool>>(validity: I, len: usize) -> Option<Bitmask> {
    let mut mask: Option<Bitmask> = None;
    for (i, valid) in validity.into_iter().enumerate() {
        if !valid {
            mask.get_or_insert_with(|| Bitmask::new_set_all(len, true)).set(i, false);
        }
    }
    mask
}

/// Merge two optional Bitmasks under recycling into a new output mask, computing the
/// per-row AND of `lhs[i % lhs_len]` and `rhs[i % rhs_len]`.
/// Returns None if both inputs are None (output is dense).
#[inline]
pub fn merge_bitmasks_to_new(
    lhs: Option<&Bitmask>,
    lhs_len: usize,
    rhs: Option<&Bitmask>,
    rhs_len: usize,
    len: usize,
) -> Option<Bitmask> {
    if lhs.is_none() && rhs.is_none() {
        return None;
    }
    bitmask_from_validity(
        (0..len).map(|i| is_valid(lhs, i % lhs_len) && is_valid(rhs, i % rhs_len)),
        len,
    )
}

/// Output length for operands combined under the recycling rule.
///
/// The longer length must be a multiple of every shorter one. Any zero-length operand
/// gives an empty result.
pub fn recycled_len(label: &str, lens: &[usize]) -> Result<usize, KernelError> {
    if lens.iter().any(|&n| n == 0) {
        return Ok(0);
    }
    let max = lens.iter().copied().max().unwrap_or(0);
    for &n in lens {
        if max % n != 0 {
            return Err(KernelError::Recycling(log_length_mismatch(label, max, n)));
        }
    }
    Ok(max)
}

/// Validates that two lengths can be recycled against each other and returns the
/// output length.
#[inline]
pub fn confirm_recyclable(label: &str, a: usize, b: usize) -> Result<usize, KernelError> {
    recycled_len(label, &[a, b])
}

/// Allocates an output buffer, reporting exhaustion as an error instead of aborting.
pub fn try_alloc_vec<T>(label: &str, capacity: usize) -> Result<Vec<T>, KernelError> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity).map_err(|e| {
        KernelError::AllocationFailure(format!("{}: cannot reserve {} elements ({})", label, capacity, e))
    })?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(bits: &[bool]) -> Bitmask {
        let mut m = Bitmask::new_set_all(bits.len(), true);
        for (i, &b) in bits.iter().enumerate() {
            m.set(i, b);
        }
        m
    }

    #[test]
    fn test_recycled_len() {
        assert_eq!(recycled_len("t", &[4, 2]).unwrap(), 4);
        assert_eq!(recycled_len("t", &[1, 5, 5]).unwrap(), 5);
        assert_eq!(recycled_len("t", &[0, 3]).unwrap(), 0);
        assert!(matches!(recycled_len("t", &[3, 2]), Err(KernelError::Recycling(_))));
    }

    #[test]
    fn test_bitmask_from_validity_dense() {
        assert!(bitmask_from_validity([true, true, true], 3).is_none());
        let m = bitmask_from_validity([true, false, true], 3).unwrap();
        assert!(m.get(0));
        assert!(!m.get(1));
        assert!(m.get(2));
    }

    #[test]
    fn test_merge_recycled() {
        let l = mask(&[true, false, true, true]);
        let r = mask(&[true, false]);
        let out = merge_bitmasks_to_new(Some(&l), 4, Some(&r), 2, 4).unwrap();
        let got: Vec<bool> = (0..4).map(|i| out.get(i)).collect();
        assert_eq!(got, vec![true, false, true, false]);
        assert!(merge_bitmasks_to_new(None, 3, None, 3, 3).is_none());
    }

    #[test]
    fn test_count_nulls() {
        let m = mask(&[true, false, false]);
        assert_eq!(count_nulls(Some(&m), 3), 2);
        assert_eq!(count_nulls(None, 3), 0);
    }
}
