//! Configuration for the `saju` binary.
//!
//! Settings come from environment variables; command-line flags override
//! them:
//! - `SAJU_FORMAT` -- default output format, `text` (default) or `json`
//! - `SAJU_SYSTEM_PROMPT` -- replaces the prompt system message
//!
//! Log filtering uses the standard `RUST_LOG` variable.

use std::str::FromStr;

use clap::ValueEnum;
use saju_core::PromptConfig;

use crate::error::CliError;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::Config(format!(
                "SAJU_FORMAT must be text or json, got {other:?}"
            ))),
        }
    }
}

/// Complete CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub prompt: PromptConfig,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// A `format` given on the command line wins, and `SAJU_FORMAT` is then
    /// not read at all.
    pub fn from_env(format: Option<OutputFormat>) -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok(), format)
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        format: Option<OutputFormat>,
    ) -> Result<Self, CliError> {
        let format = match (format, lookup("SAJU_FORMAT")) {
            (Some(f), _) => f,
            (None, Some(v)) => v.parse()?,
            (None, None) => OutputFormat::default(),
        };
        let prompt = match lookup("SAJU_SYSTEM_PROMPT") {
            Some(system) if !system.trim().is_empty() => PromptConfig { system },
            _ => PromptConfig::default(),
        };
        Ok(Self { format, prompt })
    }
}
