// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{BooleanArray, FloatArray, IntegerArray};

use crate::errors::KernelError;
use crate::kernels::{cast, comparison, format, sequence, sort, window};
use crate::operators::Notation;
use crate::structs::{BigFloatArray, BigIntegerArray, MaskedBigArray};

/// Either kind of big-number array, for operations both kinds share.
///
/// The set of kinds is closed, so dispatch is a `match` rather than a trait object.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericArray {
    Integer(BigIntegerArray),
    Float(BigFloatArray),
}

impl NumericArray {
    pub fn len(&self) -> usize {
        match self {
            NumericArray::Integer(a) => a.len(),
            NumericArray::Float(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn null_count(&self) -> usize {
        match self {
            NumericArray::Integer(a) => a.null_count(),
            NumericArray::Float(a) => a.null_count(),
        }
    }

    /// Formats the array. Integers ignore `digits` and `is_sigfig`.
    pub fn format(
        &self,
        notation: Notation,
        digits: Option<u32>,
        is_sigfig: bool,
    ) -> Result<Vec<Option<String>>, KernelError> {
        match self {
            NumericArray::Integer(a) => Ok(format::format_biginteger(a, notation)),
            NumericArray::Float(a) => format::format_bigfloat(a, notation, digits, is_sigfig),
        }
    }

    /// Three-way comparison against an array of the same kind.
    ///
    /// # Errors
    /// `InvalidArguments` when the kinds differ; `Recycling` for incompatible lengths.
    pub fn compare(&self, rhs: &NumericArray, na_equal: bool) -> Result<IntegerArray<i32>, KernelError> {
        match (self, rhs) {
            (NumericArray::Integer(l), NumericArray::Integer(r)) => comparison::compare_biginteger(l, r, na_equal),
            (NumericArray::Float(l), NumericArray::Float(r)) => comparison::compare_bigfloat(l, r, na_equal),
            _ => Err(mixed_kinds("compare")),
        }
    }

    /// Progressions `from, from + by, ...` not passing `to`, one per recycled triple.
    pub fn seq_to_by(from: &NumericArray, to: &NumericArray, by: &NumericArray) -> Result<NumericArray, KernelError> {
        use NumericArray::*;
        match (from, to, by) {
            (Integer(f), Integer(t), Integer(b)) => sequence::seq_to_by_biginteger(f, t, b).map(Integer),
            (Float(f), Float(t), Float(b)) => sequence::seq_to_by_bigfloat(f, t, b).map(Float),
            _ => Err(mixed_kinds("seq_to_by")),
        }
    }

    pub fn seq_to_lo(from: &NumericArray, to: &NumericArray, length_out: &[Option<i32>]) -> Result<NumericArray, KernelError> {
        use NumericArray::*;
        match (from, to) {
            (Integer(f), Integer(t)) => sequence::seq_to_lo_biginteger(f, t, length_out).map(Integer),
            (Float(f), Float(t)) => sequence::seq_to_lo_bigfloat(f, t, length_out).map(Float),
            _ => Err(mixed_kinds("seq_to_lo")),
        }
    }

    pub fn seq_by_lo(from: &NumericArray, by: &NumericArray, length_out: &[Option<i32>]) -> Result<NumericArray, KernelError> {
        use NumericArray::*;
        match (from, by) {
            (Integer(f), Integer(b)) => sequence::seq_by_lo_biginteger(f, b, length_out).map(Integer),
            (Float(f), Float(b)) => sequence::seq_by_lo_bigfloat(f, b, length_out).map(Float),
            _ => Err(mixed_kinds("seq_by_lo")),
        }
    }

    pub fn rank(&self) -> IntegerArray<i32> {
        match self {
            NumericArray::Integer(a) => window::rank_biginteger(a),
            NumericArray::Float(a) => window::rank_bigfloat(a),
        }
    }

    pub fn argsort(&self, descending: bool) -> Vec<usize> {
        match self {
            NumericArray::Integer(a) => sort::argsort_biginteger(a, descending),
            NumericArray::Float(a) => sort::argsort_bigfloat(a, descending),
        }
    }

    pub fn to_logical(&self) -> BooleanArray<()> {
        match self {
            NumericArray::Integer(a) => cast::biginteger_to_logical(a),
            NumericArray::Float(a) => cast::bigfloat_to_logical(a),
        }
    }

    pub fn to_integer(&self) -> IntegerArray<i32> {
        match self {
            NumericArray::Integer(a) => cast::biginteger_to_integer(a),
            NumericArray::Float(a) => cast::bigfloat_to_integer(a),
        }
    }

    pub fn to_double(&self) -> FloatArray<f64> {
        match self {
            NumericArray::Integer(a) => cast::biginteger_to_double(a),
            NumericArray::Float(a) => cast::bigfloat_to_double(a),
        }
    }
}

fn mixed_kinds(label: &str) -> KernelError {
    KernelError::InvalidArguments(format!(
        "{}: operands must all be integer or all be float arrays",
        label
    ))
}

impl From<BigIntegerArray> for NumericArray {
    fn from(a: BigIntegerArray) -> Self {
        NumericArray::Integer(a)
    }
}

impl From<BigFloatArray> for NumericArray {
    fn from(a: BigFloatArray) -> Self {
        NumericArray::Float(a)
    }
}
