// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Bitmask;

use crate::config::Precision;
use crate::numeric::BigFloat;
use crate::structs::{MaskedBigArray, masked_eq, split_options};

/// Null-aware vector of decimal floats sharing one working precision.
///
/// Every stored value is already rounded to `precision`; constructors enforce this and
/// kernels round each result before storing it.
#[derive(Clone, Debug, Default)]
pub struct BigFloatArray {
    pub data: Vec<BigFloat>,
    pub null_mask: Option<Bitmask>,
    pub precision: Precision,
}

impl BigFloatArray {
    pub fn from_slice(values: &[BigFloat], precision: Precision) -> Self {
        BigFloatArray {
            data: values.iter().map(|v| v.round_to(precision)).collect(),
            null_mask: None,
            precision,
        }
    }

    pub fn from_options<I: IntoIterator<Item = Option<BigFloat>>>(values: I, precision: Precision) -> Self {
        let (data, null_mask) = split_options(
            values
                .into_iter()
                .map(|v| v.map(|x| x.round_to(precision))),
        );
        BigFloatArray {
            data,
            null_mask,
            precision,
        }
    }

    /// Imports native doubles at the given precision; `None` is missing.
    pub fn from_f64s(values: &[Option<f64>], precision: Precision) -> Self {
        Self::from_options(values.iter().map(|v| v.map(BigFloat::from_f64)), precision)
    }

    /// Re-rounds every element to a new precision.
    ///
    /// Widening keeps the stored digits unchanged.
    pub fn with_precision(&self, precision: Precision) -> Self {
        let data = if precision >= self.precision {
            self.data.clone()
        } else {
            self.data.iter().map(|v| v.round_to(precision)).collect()
        };
        BigFloatArray {
            data,
            null_mask: self.null_mask.clone(),
            precision,
        }
    }
}

impl MaskedBigArray for BigFloatArray {
    type Element = BigFloat;

    #[inline]
    fn data(&self) -> &[BigFloat] {
        &self.data
    }

    #[inline]
    fn null_mask(&self) -> Option<&Bitmask> {
        self.null_mask.as_ref()
    }
}

impl PartialEq for BigFloatArray {
    /// Equal when precisions match and every slot holds the same value or is missing
    /// in both arrays.
    fn eq(&self, other: &Self) -> bool {
        self.precision == other.precision && masked_eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(d: u32) -> Precision {
        Precision::new(d).unwrap()
    }

    #[test]
    fn test_construction_rounds() {
        let arr = BigFloatArray::from_options(
            vec![Some("3.14159".parse::<BigFloat>().unwrap()), None],
            p(3),
        );
        assert_eq!(arr.get(0), Some(&BigFloat::parse_exact("3.14").unwrap()));
        assert!(arr.is_null(1));
        assert_eq!(arr.null_count(), 1);
    }

    #[test]
    fn test_with_precision() {
        let arr = BigFloatArray::from_f64s(&[Some(2.71828), Some(-0.5)], p(20));
        let narrow = arr.with_precision(p(2));
        assert_eq!(narrow.precision, p(2));
        assert_eq!(narrow.get(0), Some(&BigFloat::parse_exact("2.7").unwrap()));
        assert_eq!(narrow.with_precision(p(20)).get(0), narrow.get(0));
        assert_ne!(narrow, arr);
    }
}
