//! # Keys Subcommand
//!
//! `dexcalc keys "12+3="` replays a keypad sequence through a fresh
//! [`CalculatorSession`] and prints the screen after every key, or only the
//! last one with `--final`.
//!
//! Keys: `0-9 .` digits, `+ - * /` operators, `=` compute, `C` clear,
//! `<` delete. Whitespace is ignored.

use anyhow::Context;
use clap::Args;

use dexcalc_core::{CalculatorSession, Entry, Key, Screen};

use crate::config::Settings;
use crate::output::{print_json, OutputFormat};

/// Arguments for the keys subcommand.
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Key sequence to replay.
    #[arg(allow_hyphen_values = true)]
    pub sequence: String,

    /// Print only the final screen.
    #[arg(long = "final")]
    pub final_only: bool,
}

/// Run the keys subcommand.
pub fn run_keys(args: &KeysArgs, settings: &Settings) -> anyhow::Result<u8> {
    let keys = Key::parse_sequence(&args.sequence)
        .with_context(|| format!("cannot replay key sequence {:?}", args.sequence))?;

    tracing::info!(keys = keys.len(), "replaying key sequence");

    if args.final_only {
        let screen = final_screen(&keys);
        match settings.format {
            OutputFormat::Text => println!("{}", render_text(&screen, settings.show_names)),
            OutputFormat::Json => print_json(&screen)?,
        }
        return Ok(0);
    }

    let screens = replay(&keys);
    match settings.format {
        OutputFormat::Text => {
            for screen in &screens {
                println!("{}", render_text(screen, settings.show_names));
            }
        }
        OutputFormat::Json => print_json(&screens)?,
    }

    Ok(0)
}

/// Feed keys into a fresh session, collecting one screen per key.
pub fn replay(keys: &[Key]) -> Vec<Screen> {
    let mut session = CalculatorSession::new();
    keys.iter().map(|key| session.press(*key)).collect()
}

/// The screen after the last key. An empty sequence yields the initial
/// screen.
pub fn final_screen(keys: &[Key]) -> Screen {
    let mut session = CalculatorSession::new();
    keys.iter().fold(session.screen(), |_, key| session.press(*key))
}

/// One line per screen: entry, pending operator, identifier, cry marker.
pub fn render_text(screen: &Screen, show_names: bool) -> String {
    let entry = match &screen.entry {
        Entry::Value(text) => text.clone(),
        Entry::Error(err) => format!("error: {}", err.kind()),
    };
    let pending = screen.pending.map_or(" ", |op| op.symbol());
    let display = match (screen.identifier, screen.name) {
        (Some(id), Some(name)) if show_names => format!("{} {name}", id.tag()),
        (Some(id), _) => id.tag(),
        (None, _) => "???".to_string(),
    };
    let mut line = format!("{entry:<20} {pending} {display}");
    if let Some(cry) = screen.cry {
        line.push_str(&format!(" (cry {})", cry.tag()));
    }
    line
}
