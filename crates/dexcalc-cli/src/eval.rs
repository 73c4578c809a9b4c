//! # Eval Subcommand
//!
//! `dexcalc eval <prev> <op> <cur>`: one binary evaluation. Operands are
//! passed through as raw text, so anything the calculator would accept from
//! its keypad (or would reject) behaves the same here.

use clap::Args;

use dexcalc_core::{evaluate_symbol, format_number, EvaluationResult, Outcome};

use crate::config::Settings;
use crate::output::{print_json, OutputFormat};
use crate::EXIT_DOMAIN_FAILURE;

/// Arguments for the eval subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Left-hand operand.
    #[arg(allow_hyphen_values = true)]
    pub previous: String,

    /// Operator symbol: `+`, `-`, `*` or `/`.
    #[arg(allow_hyphen_values = true)]
    pub operator: String,

    /// Right-hand operand.
    #[arg(allow_hyphen_values = true)]
    pub current: String,
}

/// Run the eval subcommand. Returns the process exit code.
pub fn run_eval(args: &EvalArgs, settings: &Settings) -> anyhow::Result<u8> {
    let result = evaluate_symbol(args.previous.as_str(), args.current.as_str(), &args.operator);
    tracing::info!(
        previous = %args.previous,
        operator = %args.operator,
        current = %args.current,
        ok = result.is_ok(),
        "evaluated"
    );

    match settings.format {
        OutputFormat::Text => println!("{}", render_text(&result)),
        OutputFormat::Json => print_json(&Outcome::from(result))?,
    }

    Ok(if result.is_ok() { 0 } else { EXIT_DOMAIN_FAILURE })
}

/// Text form of an evaluation: the value, or `error: <kind>`.
pub fn render_text(result: &EvaluationResult) -> String {
    match result {
        Ok(value) => format_number(*value),
        Err(err) => format!("error: {}", err.kind()),
    }
}
