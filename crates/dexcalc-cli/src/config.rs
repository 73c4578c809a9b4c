//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key has a default, so an
//! empty file is valid. Unknown keys are rejected so that typos surface
//! instead of being silently ignored.
//!
//! ```yaml
//! format: json
//! log_filter: info
//! log_format: json
//! show_names: false
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Shape of the log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Settings loaded from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
    /// `EnvFilter` directive used when no `-v` flag is given.
    pub log_filter: Option<String>,
    /// Log line format.
    pub log_format: LogFormat,
    /// Include catalog names in `keys` output.
    pub show_names: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_filter: None,
            log_format: LogFormat::Text,
            show_names: true,
        }
    }
}

impl CliConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse config YAML. Empty input yields the defaults.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Config merged with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Effective output format.
    pub format: OutputFormat,
    /// Include catalog names in `keys` output.
    pub show_names: bool,
}

impl Settings {
    /// Apply flag overrides on top of the file config.
    pub fn resolve(config: &CliConfig, format: Option<OutputFormat>) -> Self {
        Self {
            format: format.unwrap_or(config.format),
            show_names: config.show_names,
        }
    }
}
