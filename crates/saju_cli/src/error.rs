//! Error types for the command-line front end.

use saju_core::SajuError;

/// Errors surfaced to the user by the `saju` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Derivation or input validation failed.
    #[error("{0}")]
    Saju(#[from] SajuError),

    /// An environment setting is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// JSON output could not be produced.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
}
