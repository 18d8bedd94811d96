#![allow(unused)]

pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

/// Compares canonical float strings against `f64` references, relative to the
/// reference magnitude. Missing slots must line up.
pub fn assert_strings_close(a: &[Option<String>], e: &[Option<f64>], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (ai, ei)) in a.iter().zip(e.iter()).enumerate() {
        match (ai, ei) {
            (None, None) => {}
            (Some(s), Some(ev)) => {
                let av: f64 = match s.as_str() {
                    "Inf" => f64::INFINITY,
                    "-Inf" => f64::NEG_INFINITY,
                    "NaN" => f64::NAN,
                    other => other.parse().unwrap_or_else(|_| panic!("idx {i}: unparsable {other}")),
                };
                if ev.is_nan() {
                    assert!(av.is_nan(), "idx {i}: expected NaN, got {s}");
                    continue;
                }
                if ev.is_infinite() {
                    assert_eq!(av, *ev, "idx {i}: expected {ev}, got {s}");
                    continue;
                }
                let scale = f64::MIN_POSITIVE.max(ev.abs());
                assert!((av - ev).abs() <= tol * scale, "idx {i}: got {s}, expect {ev} (tol={tol})");
            }
            _ => panic!("idx {i}: missing mismatch, got {ai:?}, expect {ei:?}"),
        }
    }
}

/// `Some` strings from literals, `None` for missing.
pub fn strs(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_string)).collect()
}
