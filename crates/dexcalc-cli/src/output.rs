//! # Output Formatting
//!
//! Every subcommand prints either human-readable text or one JSON document
//! per invocation.

use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one result per line.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Render a value as a single JSON line.
pub fn to_json_line<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Print a value as a single JSON line on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", to_json_line(value)?);
    Ok(())
}
