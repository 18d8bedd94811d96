// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Parse Kernels** - *Canonical Strings to Null-Aware Arrays*
//!
//! Each element is parsed independently. Absent elements, the missing token and
//! unparsable literals all become missing slots; parsing never fails the whole vector.

use tracing::debug;

use crate::config::{MISSING_TOKEN, Precision};
use crate::numeric::{BigFloat, BigInteger};
use crate::structs::{BigFloatArray, BigIntegerArray};

/// Shared element loop: tallies rejected literals and logs them once per call.
fn parse_each<S, T, F>(label: &str, values: &[Option<S>], mut parse: F) -> Vec<Option<T>>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Option<T>,
{
    let mut rejected = 0usize;
    let out = values
        .iter()
        .map(|v| {
            let s = v.as_ref()?.as_ref();
            if s.trim() == MISSING_TOKEN {
                return None;
            }
            let parsed = parse(s);
            if parsed.is_none() {
                rejected += 1;
            }
            parsed
        })
        .collect();
    if rejected > 0 {
        debug!(
            kernel = label,
            rejected,
            len = values.len(),
            "unparsable literals set to missing"
        );
    }
    out
}

/// Parses decimal or `0x` hexadecimal integer literals.
pub fn parse_biginteger<S: AsRef<str>>(values: &[Option<S>]) -> BigIntegerArray {
    BigIntegerArray::from_options(parse_each("parse_biginteger", values, |s| {
        s.parse::<BigInteger>().ok()
    }))
}

/// Parses decimal float literals and the `Inf`/`NaN` spellings, rounding each value
/// to `precision`.
pub fn parse_bigfloat<S: AsRef<str>>(values: &[Option<S>], precision: Precision) -> BigFloatArray {
    let parsed = parse_each("parse_bigfloat", values, |s| BigFloat::parse(s, precision).ok());
    BigFloatArray::from_options(parsed, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::MaskedBigArray;

    #[test]
    fn test_parse_biginteger_missing_and_invalid() {
        let arr = parse_biginteger(&[Some("12"), None, Some("NA"), Some("1.5"), Some(" -0x1F ")]);
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.null_count(), 3);
        assert_eq!(arr.get(0).map(|v| v.to_string()), Some("12".to_string()));
        assert_eq!(arr.get(4).map(|v| v.to_string()), Some("-31".to_string()));
    }

    #[test]
    fn test_parse_bigfloat_specials_and_rounding() {
        let p = Precision::new(3).unwrap();
        let arr = parse_bigfloat(&[Some("3.14159"), Some("-Inf"), Some("nan"), Some(""), Some("1e")], p);
        assert_eq!(arr.get(0), Some(&BigFloat::parse_exact("3.14").unwrap()));
        assert_eq!(arr.get(1), Some(&BigFloat::infinity(true)));
        assert!(arr.get(2).map_or(false, |v| v.is_nan()));
        assert!(arr.is_null(3));
        assert!(arr.is_null(4));
        assert_eq!(arr.precision, p);
    }

    #[test]
    fn test_parse_accepts_owned_strings() {
        let input: Vec<Option<String>> = vec![Some("7".into()), None];
        let arr = parse_biginteger(&input);
        assert_eq!(arr.null_count(), 1);
    }
}
