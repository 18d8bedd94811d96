// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Bitmask;

use crate::numeric::BigInteger;
use crate::structs::{MaskedBigArray, masked_eq, split_options};

/// Null-aware vector of exact integers.
#[derive(Clone, Debug, Default)]
pub struct BigIntegerArray {
    pub data: Vec<BigInteger>,
    pub null_mask: Option<Bitmask>,
}

impl BigIntegerArray {
    /// Dense array without missing slots.
    pub fn from_slice(values: &[BigInteger]) -> Self {
        BigIntegerArray {
            data: values.to_vec(),
            null_mask: None,
        }
    }

    pub fn from_options<I: IntoIterator<Item = Option<BigInteger>>>(values: I) -> Self {
        let (data, null_mask) = split_options(values);
        BigIntegerArray { data, null_mask }
    }

    /// Convenience constructor from native values, mainly for tests and callers that
    /// already hold machine integers.
    pub fn from_i64s(values: &[Option<i64>]) -> Self {
        Self::from_options(values.iter().map(|v| v.map(BigInteger::from)))
    }
}

impl MaskedBigArray for BigIntegerArray {
    type Element = BigInteger;

    #[inline]
    fn data(&self) -> &[BigInteger] {
        &self.data
    }

    #[inline]
    fn null_mask(&self) -> Option<&Bitmask> {
        self.null_mask.as_ref()
    }
}

impl PartialEq for BigIntegerArray {
    fn eq(&self, other: &Self) -> bool {
        masked_eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options_masks_missing() {
        let arr = BigIntegerArray::from_i64s(&[Some(1), None, Some(3)]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.null_count(), 1);
        assert!(arr.is_null(1));
        assert_eq!(arr.get(2), Some(&BigInteger::from(3i64)));
        assert_eq!(arr.get(1), None);
    }

    #[test]
    fn test_dense_has_no_mask() {
        let arr = BigIntegerArray::from_i64s(&[Some(1), Some(2)]);
        assert!(arr.null_mask.is_none());
        assert_eq!(arr, BigIntegerArray::from_slice(&[1i64.into(), 2i64.into()]));
    }
}
