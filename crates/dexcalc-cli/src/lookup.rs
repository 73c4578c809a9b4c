//! # Normalize and Lookup Subcommands
//!
//! `dexcalc normalize <value>` prints the identifier a value maps to.
//! `dexcalc lookup <value>` also prints its catalog name.

use clap::Args;
use serde::Serialize;

use dexcalc_core::{name_for, normalize, Identifier};

use crate::config::Settings;
use crate::output::{print_json, OutputFormat};
use crate::EXIT_DOMAIN_FAILURE;

/// Text printed for values with no identifier.
pub const INVALID: &str = "invalid";

/// Arguments shared by the normalize and lookup subcommands.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Raw value: a number, numeric text, or anything else.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Debug, Serialize)]
struct LookupReport<'a> {
    input: &'a str,
    identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
}

/// Run the normalize subcommand.
pub fn run_normalize(args: &LookupArgs, settings: &Settings) -> anyhow::Result<u8> {
    report(args, settings, false)
}

/// Run the lookup subcommand.
pub fn run_lookup(args: &LookupArgs, settings: &Settings) -> anyhow::Result<u8> {
    report(args, settings, true)
}

fn report(args: &LookupArgs, settings: &Settings, with_name: bool) -> anyhow::Result<u8> {
    let identifier = normalize(args.value.as_str());
    tracing::info!(input = %args.value, identifier = ?identifier.map(|id| id.get()), "normalized");

    match settings.format {
        OutputFormat::Text => println!("{}", render_text(identifier, with_name)),
        OutputFormat::Json => print_json(&LookupReport {
            input: &args.value,
            identifier,
            name: if with_name { identifier.map(name_for) } else { None },
        })?,
    }

    Ok(if identifier.is_some() { 0 } else { EXIT_DOMAIN_FAILURE })
}

/// `25`, `#25 Pikachu`, or `invalid`.
pub fn render_text(identifier: Option<Identifier>, with_name: bool) -> String {
    match identifier {
        None => INVALID.to_string(),
        Some(id) if with_name => format!("{} {}", id.tag(), name_for(id)),
        Some(id) => id.to_string(),
    }
}
