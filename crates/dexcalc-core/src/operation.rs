//! # Operations
//!
//! The closed set of binary operators. Every `match` on [`Operation`] is
//! exhaustive, so there is no "other operator" case past the parsing
//! boundary: unknown symbols are rejected by [`Operation::from_symbol()`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Subtract,
    /// `*`
    #[serde(rename = "*")]
    Multiply,
    /// `/`
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// All operations in keypad order.
    pub fn all() -> &'static [Operation] {
        &[Self::Add, Self::Subtract, Self::Multiply, Self::Divide]
    }

    /// The ASCII symbol, matching the serde form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parse an operator symbol.
    ///
    /// Accepts the ASCII symbols and the typographic `×`, `÷` and `−`.
    /// Surrounding whitespace is not trimmed.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "\u{2212}" => Some(Self::Subtract),
            "*" | "\u{00D7}" => Some(Self::Multiply),
            "/" | "\u{00F7}" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply to two finite operands without rounding or zero checks.
    pub(crate) fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ValidationError::UnknownOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_roundtrip() {
        for op in Operation::all() {
            assert_eq!(op.symbol().parse::<Operation>().unwrap(), *op);
        }
    }

    #[test]
    fn typographic_aliases() {
        assert_eq!(Operation::from_symbol("×"), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol("÷"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("−"), Some(Operation::Subtract));
    }

    #[test]
    fn unknown_symbols_rejected() {
        for s in ["%", "^", "", " +", "plus", "**"] {
            assert!(s.parse::<Operation>().is_err(), "{s:?} accepted");
        }
    }

    #[test]
    fn serde_uses_symbol() {
        for op in Operation::all() {
            let json = serde_json::to_string(op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.symbol()));
        }
    }
}
