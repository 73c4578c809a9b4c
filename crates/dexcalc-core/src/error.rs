//! # Error Types
//!
//! Every failure the core can report. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - [`EvalError`] is the closed taxonomy of arithmetic failures. Its serde
//!   form is the kebab-case error kind (`"divide-by-zero"`), which is what
//!   callers match on.
//! - [`ValidationError`] covers strict constructors and symbol parsing.
//! - Identifier normalization does not fail with an error: it has a single
//!   failure mode and returns `None`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure kinds of a single binary evaluation.
///
/// Exactly one kind is reported per failed call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalError {
    /// One or both operands did not coerce to a finite number.
    #[error("invalid number")]
    InvalidNumber,

    /// The divisor coerced to exactly zero.
    #[error("division by zero")]
    DivideByZero,

    /// The operator symbol is outside `+ - * /`.
    #[error("invalid operator")]
    InvalidOperator,
}

impl EvalError {
    /// Returns the kebab-case error kind, matching the serde form.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidNumber => "invalid-number",
            Self::DivideByZero => "divide-by-zero",
            Self::InvalidOperator => "invalid-operator",
        }
    }
}

/// Error raised by strict constructors and parsers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier outside the closed catalog range.
    #[error("identifier {value} is outside {min}..={max}")]
    IdentifierOutOfRange {
        /// The rejected value.
        value: i64,
        /// Lowest valid identifier.
        min: u16,
        /// Highest valid identifier.
        max: u16,
    },

    /// Unrecognised operator symbol.
    #[error("unknown operator symbol: {0:?}")]
    UnknownOperator(String),

    /// Unrecognised keypad key.
    #[error("unknown key: {0:?}")]
    UnknownKey(char),
}
