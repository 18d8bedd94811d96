// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Bitmask;

/// Iterator over non-null values in a slice, using an optional Bitmask.
///
/// Yields references, since big-number elements are heap-owned and not `Copy`.
pub struct DenseIter<'a, T> {
    slice: &'a [T],
    idx: usize,
    mask: Option<&'a Bitmask>,
    len: usize,
}

impl<'a, T> DenseIter<'a, T> {
    #[inline(always)]
    pub fn new(slice: &'a [T], mask: Option<&'a Bitmask>) -> Self {
        let len = slice.len();
        Self {
            slice,
            idx: 0,
            mask,
            len,
        }
    }
}

impl<'a, T> Iterator for DenseIter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        match self.mask {
            None => {
                if self.idx >= self.len {
                    None
                } else {
                    let v = &self.slice[self.idx];
                    self.idx += 1;
                    Some(v)
                }
            }
            Some(m) => {
                while self.idx < self.len {
                    let i = self.idx;
                    self.idx += 1;
                    if m.get(i) {
                        return Some(&self.slice[i]);
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_cleared_bits() {
        let mut m = Bitmask::new_set_all(4, true);
        m.set(1, false);
        m.set(3, false);
        let data = vec![String::from("a"), String::from("b"), String::from("c"), String::from("d")];
        let valid: Vec<&String> = DenseIter::new(&data, Some(&m)).collect();
        assert_eq!(valid, vec!["a", "c"]);
        assert_eq!(DenseIter::new(&data, None).count(), 4);
    }
}
