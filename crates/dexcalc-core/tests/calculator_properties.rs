//! # Calculator Property Tests
//!
//! End-to-end checks of the public API against the documented contract:
//! the normalization examples, the evaluation examples, and a table of
//! float-sensitive sums that must come back exactly at eight decimals.

use dexcalc_core::{
    evaluate, evaluate_symbol, name_for, normalize, EvalError, Identifier, Operation, Outcome,
    RawValue,
};

fn id(value: impl Into<RawValue>) -> Option<u16> {
    normalize(value).map(|id| id.get())
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_accepts_valid_values() {
    assert_eq!(id(1), Some(1));
    assert_eq!(id("25"), Some(25));
    assert_eq!(id(-7), Some(7));
    assert_eq!(id(151.9), Some(151));
}

#[test]
fn normalize_rejects_invalid_values() {
    assert_eq!(id(0), None);
    assert_eq!(id("abc"), None);
    assert_eq!(id(2000), None);
    assert_eq!(id(f64::INFINITY), None);
}

#[test]
fn normalize_is_idempotent() {
    for value in ["1", "25", "-7", "151.9", "0", "abc", "1025", "1026", " 3 "] {
        assert_eq!(normalize(value), normalize(value));
        // Normalizing an identifier yields the same identifier.
        if let Some(first) = normalize(value) {
            assert_eq!(normalize(first.get()), Some(first));
        }
    }
}

#[test]
fn every_identifier_in_range_normalizes_to_itself() {
    for n in Identifier::MIN..=Identifier::MAX {
        assert_eq!(id(n), Some(n));
        assert_eq!(id(-f64::from(n)), Some(n));
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

#[test]
fn evaluate_handles_operations() {
    assert_eq!(evaluate_symbol("2", "3", "+"), Ok(5.0));
    assert_eq!(evaluate_symbol("7", "4", "-"), Ok(3.0));
    assert_eq!(evaluate_symbol("6", "5", "*"), Ok(30.0));
}

#[test]
fn evaluate_handles_divide_by_zero() {
    let outcome = Outcome::from(evaluate_symbol("10", "0", "/"));
    assert_eq!(
        serde_json::to_value(outcome).unwrap(),
        serde_json::json!({"ok": false, "error": "divide-by-zero"})
    );
}

#[test]
fn evaluate_rounds_to_eight_decimals() {
    assert_eq!(evaluate_symbol("0.1", "0.2", "+"), Ok(0.3));
}

#[test]
fn evaluate_is_idempotent() {
    for op in Operation::all() {
        assert_eq!(evaluate("0.7", "0.1", *op), evaluate("0.7", "0.1", *op));
    }
}

/// Sums whose naive float result carries representation noise.
#[test]
fn float_sensitive_table() {
    let cases: &[(&str, &str, Operation, f64)] = &[
        ("0.1", "0.2", Operation::Add, 0.3),
        ("0.1", "0.7", Operation::Add, 0.8),
        ("0.2", "0.4", Operation::Add, 0.6),
        ("1.1", "2.2", Operation::Add, 3.3),
        ("0.3", "0.6", Operation::Add, 0.9),
        ("1", "0.9", Operation::Subtract, 0.1),
        ("0.3", "0.1", Operation::Subtract, 0.2),
        ("1.15", "100", Operation::Multiply, 115.0),
        ("0.07", "100", Operation::Multiply, 7.0),
        ("3", "0.1", Operation::Multiply, 0.3),
        ("0.3", "3", Operation::Divide, 0.1),
        ("4.35", "100", Operation::Multiply, 435.0),
        ("1", "7", Operation::Divide, 0.14285714),
        ("-1", "7", Operation::Divide, -0.14285714),
    ];
    for (lhs, rhs, op, expected) in cases {
        assert_eq!(
            evaluate(*lhs, *rhs, *op),
            Ok(*expected),
            "{lhs} {op} {rhs}"
        );
    }
}

#[test]
fn error_kinds_are_exclusive() {
    assert_eq!(evaluate_symbol("a", "0", "/"), Err(EvalError::InvalidNumber));
    assert_eq!(evaluate_symbol("1", "0", "?"), Err(EvalError::InvalidOperator));
    assert_eq!(evaluate_symbol("1", "0", "/"), Err(EvalError::DivideByZero));
}

// ---------------------------------------------------------------------------
// Results feed the display
// ---------------------------------------------------------------------------

#[test]
fn result_drives_catalog_lookup() {
    let value = evaluate_symbol("150", "1", "+").unwrap();
    let ident = normalize(value).unwrap();
    assert_eq!(name_for(ident), "Mew");

    let value = evaluate_symbol("500", "1", "*").unwrap();
    assert_eq!(name_for(normalize(value).unwrap()), "Unbekannt");
}
