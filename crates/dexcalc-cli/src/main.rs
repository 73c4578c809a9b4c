//! # dexcalc CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, sets up
//! tracing and dispatches to subcommand handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dexcalc_cli::config::{CliConfig, LogFormat, Settings};
use dexcalc_cli::eval::{run_eval, EvalArgs};
use dexcalc_cli::keys::{run_keys, KeysArgs};
use dexcalc_cli::lookup::{run_lookup, run_normalize, LookupArgs};
use dexcalc_cli::output::OutputFormat;

/// dexcalc: a calculator that shows the creature behind every result.
#[derive(Parser, Debug)]
#[command(name = "dexcalc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the config file.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one binary operation.
    Eval(EvalArgs),

    /// Map a value to its catalog identifier.
    Normalize(LookupArgs),

    /// Map a value to its identifier and catalog name.
    Lookup(LookupArgs),

    /// Replay a keypad sequence through a calculator session.
    Keys(KeysArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    let (configured_filter, log_format) = match &config {
        Ok(c) => (c.log_filter.as_deref(), c.log_format),
        Err(_) => (None, LogFormat::Text),
    };

    // Initialize tracing based on verbosity level.
    let filter = EnvFilter::new(filter_directive(cli.verbose, configured_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let settings = Settings::resolve(&config, cli.format);
    tracing::debug!(?settings, "resolved settings");

    let result = match cli.command {
        Commands::Eval(args) => run_eval(&args, &settings),
        Commands::Normalize(args) => run_normalize(&args, &settings),
        Commands::Lookup(args) => run_lookup(&args, &settings),
        Commands::Keys(args) => run_keys(&args, &settings),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// `EnvFilter` directive for a `-v` count. The config file's filter only
/// applies when no `-v` is given.
fn filter_directive(verbose: u8, configured: Option<&str>) -> &str {
    match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CliConfig> {
    match path {
        Some(path) => CliConfig::load(path),
        None => Ok(CliConfig::default()),
    }
}
