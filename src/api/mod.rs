// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Host Call Surface** - *String-In, String-Out Entry Points*
//!
//! One function per routine exported to the host. Big values travel as canonical
//! strings with `None` for a missing slot, so nothing is lost at the boundary.
//! Native results (ranks, comparisons, narrowing casts) come back as plain
//! `Vec<Option<_>>`.
//!
//! Float entry points parse at [`Precision::default`](crate::config::Precision); the
//! kernels underneath accept any precision.

pub mod bigfloat;
pub mod biginteger;

use std::fmt::Display;

use minarrow::{BooleanArray, FloatArray, IntegerArray};

use crate::errors::KernelError;
use crate::operators::Notation;
use crate::structs::MaskedBigArray;
use crate::utils::is_valid;

/// Canonical strings for every slot, `None` where missing.
pub(crate) fn to_strings<A>(arr: &A) -> Vec<Option<String>>
where
    A: MaskedBigArray,
    A::Element: Display,
{
    (0..arr.len()).map(|i| arr.get(i).map(ToString::to_string)).collect()
}

/// A single aggregate as a length-one vector.
pub(crate) fn scalar_string<T: Display>(value: Option<T>) -> Vec<Option<String>> {
    vec![value.map(|v| v.to_string())]
}

pub(crate) fn integers_out(arr: &IntegerArray<i32>) -> Vec<Option<i32>> {
    let mask = arr.null_mask.as_ref();
    arr.data
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &v)| is_valid(mask, i).then_some(v))
        .collect()
}

pub(crate) fn doubles_out(arr: &FloatArray<f64>) -> Vec<Option<f64>> {
    let mask = arr.null_mask.as_ref();
    arr.data
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &v)| is_valid(mask, i).then_some(v))
        .collect()
}

pub(crate) fn logicals_out(arr: &BooleanArray<()>) -> Vec<Option<bool>> {
    let mask = arr.null_mask.as_ref();
    (0..arr.len).map(|i| is_valid(mask, i).then(|| arr.data.get(i))).collect()
}

/// Parses the host's notation argument.
pub(crate) fn notation_arg(notation: &str) -> Result<Notation, KernelError> {
    notation.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::BigIntegerArray;

    #[test]
    fn test_to_strings_keeps_missing() {
        let arr = BigIntegerArray::from_i64s(&[Some(-7), None]);
        assert_eq!(to_strings(&arr), vec![Some("-7".to_string()), None]);
        assert_eq!(scalar_string::<i32>(None), vec![None]);
    }

    #[test]
    fn test_notation_arg() {
        assert_eq!(notation_arg("sci").unwrap(), Notation::Sci);
        assert!(matches!(notation_arg("hex"), Err(KernelError::InvalidArguments(_))));
    }
}
