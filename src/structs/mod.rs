// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arrays** - *Null-Aware Vectors of Arbitrary-Precision Values*
//!
//! Each array is a value buffer plus an optional Arrow-style validity bitmask
//! (bit set = valid). Slots under a cleared bit hold a placeholder zero and are never
//! read as values. Arrays are immutable values: kernels return new arrays.

pub mod float_array;
pub mod integer_array;
pub mod numeric_array;

use minarrow::Bitmask;

pub use float_array::BigFloatArray;
pub use integer_array::BigIntegerArray;
pub use numeric_array::NumericArray;

use crate::utils::{count_nulls, is_valid};

/// Shared read access over the two array kinds.
pub trait MaskedBigArray {
    type Element: Clone + Default;

    fn data(&self) -> &[Self::Element];

    fn null_mask(&self) -> Option<&Bitmask>;

    #[inline]
    fn len(&self) -> usize {
        self.data().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    #[inline]
    fn is_null(&self, idx: usize) -> bool {
        !is_valid(self.null_mask(), idx)
    }

    /// The value at `idx`, or `None` if the slot is missing.
    #[inline]
    fn get(&self, idx: usize) -> Option<&Self::Element> {
        if self.is_null(idx) {
            None
        } else {
            self.data().get(idx)
        }
    }

    fn null_count(&self) -> usize {
        count_nulls(self.null_mask(), self.len())
    }

    /// Per-slot values with missing slots as `None`.
    fn to_options(&self) -> Vec<Option<Self::Element>> {
        (0..self.len()).map(|i| self.get(i).cloned()).collect()
    }
}

/// Splits optional values into a placeholder-filled buffer and a validity mask.
pub(crate) fn split_options<T: Default, I>(values: I) -> (Vec<T>, Option<Bitmask>)
where
    I: IntoIterator<Item = Option<T>>,
{
    let iter = values.into_iter();
    let mut data = Vec::with_capacity(iter.size_hint().0);
    let mut missing = Vec::new();
    for (i, v) in iter.enumerate() {
        match v {
            Some(x) => data.push(x),
            None => {
                data.push(T::default());
                missing.push(i);
            }
        }
    }
    let mask = if missing.is_empty() {
        None
    } else {
        let mut m = Bitmask::new_set_all(data.len(), true);
        for i in missing {
            m.set(i, false);
        }
        Some(m)
    };
    (data, mask)
}

/// Slot-wise equality including validity; placeholder values under nulls are ignored.
pub(crate) fn masked_eq<A: MaskedBigArray>(a: &A, b: &A) -> bool
where
    A::Element: PartialEq,
{
    a.len() == b.len() && (0..a.len()).all(|i| a.get(i) == b.get(i))
}
