//! # CLI Error Type
//!
//! Unified error type for every command.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  File read failed?        ── Io { path, source } ──────┐               │
//! │  Quotation JSON invalid?  ── Core(InvalidJson) ────────┤               │
//! │  Negative words amount?   ── Core(NegativeAmount) ─────┼──► CliError   │
//! │  Bad QUOTE_* variable?    ── Config(InvalidValue) ─────┤       │       │
//! │  Output encoding failed?  ── Json ─────────────────────┘       ▼       │
//! │                                                   stderr, exit code 1  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use quote_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Error returned from any command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing, words or quotation decoding failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Quotation file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be encoded as JSON.
    #[error("Cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 78,
            CliError::Io { .. } => 74,
            CliError::Core(CoreError::InvalidJson(_)) => 65,
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
