//! # dexcalc-core: Calculator Logic for dexcalc
//!
//! The pure half of the dexcalc creature calculator. Arithmetic entry on one
//! side, a creature display keyed by the numeric result on the other; this
//! crate decides what the numbers are and which creature they map to. It
//! does no I/O: fetching sprites, playing cries and resolving remote names
//! are the front end's job.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit coercion at the boundary.** Every caller value enters as a
//!    [`RawValue`]. [`RawValue::to_number()`] is the only numeric coercion in
//!    the crate.
//!
//! 2. **`Identifier` is always in range.** [`normalize()`] is the permissive
//!    path; [`Identifier::new()`] the strict one. Neither can produce a value
//!    outside `1..=1025`.
//!
//! 3. **Closed error taxonomy.** [`evaluate()`] reports exactly one
//!    [`EvalError`] kind per failure and never retries.
//!
//! 4. **No process-wide state.** Keypad state lives in a caller-owned
//!    [`CalculatorSession`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone` and `Serialize`.

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod identifier;
pub mod operation;
pub mod raw;
pub mod session;

// Re-export primary types for ergonomic imports.
pub use catalog::{lookup, name_for, UNKNOWN_NAME};
pub use error::{EvalError, ValidationError};
pub use evaluate::{
    evaluate, evaluate_symbol, round_result, EvaluationResult, Outcome, RESULT_DECIMALS,
};
pub use identifier::{normalize, Identifier};
pub use operation::Operation;
pub use raw::RawValue;
pub use session::{format_number, CalculatorSession, Entry, Key, Screen};
