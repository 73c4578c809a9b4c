//! # Arithmetic Evaluation
//!
//! One binary operation over two raw operands, with a classified failure
//! instead of `NaN` or a panic. Checks run in a fixed order and the first
//! one that fails decides the error kind:
//!
//! 1. Both operands coerce to finite numbers, else [`EvalError::InvalidNumber`].
//! 2. The operator symbol is known, else [`EvalError::InvalidOperator`]
//!    (only reachable through [`evaluate_symbol()`]).
//! 3. Division by exactly zero, else [`EvalError::DivideByZero`].
//!
//! Successful results are rounded to [`RESULT_DECIMALS`] places so that
//! `0.1 + 0.2` reports `0.3` rather than `0.30000000000000004`.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::operation::Operation;
use crate::raw::RawValue;

/// Decimal places kept in a successful result.
pub const RESULT_DECIMALS: i32 = 8;

const RESULT_SCALE: f64 = 100_000_000.0;

/// Outcome of a single evaluation.
pub type EvaluationResult = Result<f64, EvalError>;

/// Evaluate `previous <operation> current`.
pub fn evaluate(
    previous: impl Into<RawValue>,
    current: impl Into<RawValue>,
    operation: Operation,
) -> EvaluationResult {
    let (lhs, rhs) = coerce_operands(previous.into(), current.into())?;
    apply(lhs, rhs, operation)
}

/// Evaluate with the operator given as a symbol (`+`, `-`, `*`, `/`).
///
/// Operand validity is checked before the symbol, so `("x", "1", "%")`
/// reports `InvalidNumber`.
pub fn evaluate_symbol(
    previous: impl Into<RawValue>,
    current: impl Into<RawValue>,
    symbol: &str,
) -> EvaluationResult {
    let (lhs, rhs) = coerce_operands(previous.into(), current.into())?;
    let operation = Operation::from_symbol(symbol).ok_or(EvalError::InvalidOperator)?;
    apply(lhs, rhs, operation)
}

/// Round half away from zero at [`RESULT_DECIMALS`] places.
///
/// Values too large to scale are already whole and are returned as-is.
pub fn round_result(value: f64) -> f64 {
    let scaled = value * RESULT_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / RESULT_SCALE
}

fn coerce_operands(previous: RawValue, current: RawValue) -> Result<(f64, f64), EvalError> {
    match (previous.to_finite(), current.to_finite()) {
        (Some(lhs), Some(rhs)) => Ok((lhs, rhs)),
        _ => Err(EvalError::InvalidNumber),
    }
}

fn apply(lhs: f64, rhs: f64, operation: Operation) -> EvaluationResult {
    // -0.0 == 0.0, so a negative zero divisor is caught too.
    if operation == Operation::Divide && rhs == 0.0 {
        return Err(EvalError::DivideByZero);
    }
    Ok(round_result(operation.apply(lhs, rhs)))
}

/// Wire view of an [`EvaluationResult`].
///
/// `{"ok":true,"value":5.0}` or `{"ok":false,"error":"divide-by-zero"}`.
/// A result that overflowed is written as `"Infinity"` or `"-Infinity"`,
/// since JSON has no number for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the evaluation succeeded.
    pub ok: bool,
    /// The rounded value on success.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire_value")]
    pub value: Option<f64>,
    /// The error kind on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<EvalError>,
}

impl Outcome {
    /// Convert back into a `Result`. A malformed outcome with neither field
    /// set is treated as `InvalidNumber`.
    pub fn into_result(self) -> EvaluationResult {
        match (self.ok, self.value, self.error) {
            (true, Some(value), _) => Ok(value),
            (false, _, Some(error)) => Err(error),
            _ => Err(EvalError::InvalidNumber),
        }
    }
}

impl From<EvaluationResult> for Outcome {
    fn from(result: EvaluationResult) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                value: Some(value),
                error: None,
            },
            Err(error) => Self {
                ok: false,
                value: None,
                error: Some(error),
            },
        }
    }
}

/// Serde codec for [`Outcome::value`]: finite values as JSON numbers,
/// non-finite ones by name.
mod wire_value {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Named(String),
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(v) if v.is_finite() => serializer.serialize_f64(*v),
            Some(v) if v.is_nan() => serializer.serialize_str("NaN"),
            Some(v) if *v > 0.0 => serializer.serialize_str("Infinity"),
            Some(_) => serializer.serialize_str("-Infinity"),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Wire>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Wire::Number(v)) => Ok(Some(v)),
            Some(Wire::Named(name)) => match name.as_str() {
                "Infinity" => Ok(Some(f64::INFINITY)),
                "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
                "NaN" => Ok(Some(f64::NAN)),
                other => Err(serde::de::Error::custom(format!(
                    "invalid result value: {other:?}"
                ))),
            },
        }
    }
}
