//! # dexcalc-cli: Command-Line Front End
//!
//! Provides the `dexcalc` binary on top of `dexcalc-core`.
//!
//! ## Subcommands
//!
//! - `dexcalc eval <prev> <op> <cur>`: evaluate one binary operation.
//! - `dexcalc normalize <value>`: map a value to its identifier.
//! - `dexcalc lookup <value>`: identifier plus catalog name.
//! - `dexcalc keys <sequence>`: replay a keypad sequence.
//!
//! ```bash
//! dexcalc eval 0.1 + 0.2
//! dexcalc --format json eval 10 / 0
//! dexcalc lookup -- -7
//! dexcalc keys "50*3=" --final
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the core logic.
//! - Handlers delegate to `dexcalc-core`; no arithmetic lives here.
//! - Handlers return an exit code; operational failures bubble up as
//!   `anyhow::Error`.

pub mod config;
pub mod eval;
pub mod keys;
pub mod lookup;
pub mod output;

/// Exit code for a well-formed request the core rejected
/// (evaluation error, value with no identifier).
pub const EXIT_DOMAIN_FAILURE: u8 = 2;
