//! # Raw Values and Numeric Coercion
//!
//! [`RawValue`] is what callers hand to the core before anything has been
//! validated: a keypad entry, a computed result, a flag from a JSON payload.
//! [`RawValue::to_number()`] is the single place that turns one into an
//! `f64`, reproducing the loose numeric coercion the calculator has always
//! used:
//!
//! | Input | Number |
//! |-------|--------|
//! | `Number(n)` | `n` |
//! | `Bool(true)` / `Bool(false)` | `1` / `0` |
//! | `Null` | `0` |
//! | `Text("")`, `Text("   ")` | `0` |
//! | `Text(" 12.5 ")` | `12.5` |
//! | `Text("-Infinity")` | `-inf` |
//! | `Text("0x1F")`, `Text("0b101")`, `Text("0o17")` | radix integer |
//! | `Text("abc")`, `Text("inf")`, `Text("1_000")` | `NaN` |
//!
//! Coercion never fails; a value that is not a number comes back as `NaN`
//! and callers test for finiteness.

use serde::{Deserialize, Serialize};

/// An unvalidated caller-supplied value.
///
/// Deserializes from any JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// JSON `null`.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// An already-numeric value.
    Number(f64),
    /// Text that may or may not hold a number.
    Text(String),
}

impl RawValue {
    /// Coerce to a number. Unparseable text yields `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Text(s) => parse_numeric_text(s),
        }
    }

    /// Coerce to a number and keep it only if it is finite.
    pub fn to_finite(&self) -> Option<f64> {
        let n = self.to_number();
        n.is_finite().then_some(n)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u16> for RawValue {
    fn from(n: u16) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Whitespace stripped around numeric text. Includes the byte-order mark.
fn is_numeric_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn parse_numeric_text(s: &str) -> f64 {
    let s = s.trim_matches(is_numeric_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    if is_decimal_literal(s) {
        // The grammar check above excludes `inf`, `nan` and friends, which
        // `f64::from_str` would otherwise accept.
        return s.parse::<f64>().unwrap_or(f64::NAN);
    }

    f64::NAN
}

/// `0x`/`0o`/`0b` prefixed unsigned integers. Returns `Some(NaN)` for a
/// recognised prefix with bad digits, `None` when there is no prefix.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
