//! # CLI Configuration
//!
//! Loaded from environment variables with fallback to defaults.
//!
//! ## Variables
//! - `QUOTE_REF_PREFIX`: Reference-number prefix (default "SMQ")
//! - `QUOTE_LAST_REF_NO`: Last issued reference number (default 71)
//! - `QUOTE_DEFAULT_GST_RATE`: GST % for new line items (default 12)
//! - `QUOTE_FREIGHT_GST_RATE`: GST % on freight (default 18)

use std::env;
use std::str::FromStr;

use quote_core::quotation::DraftSettings;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Values new drafts start from.
    pub draft: DraftSettings,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, tests).
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut draft = DraftSettings::default();

        if let Some(prefix) = lookup("QUOTE_REF_PREFIX") {
            let prefix = prefix.trim();
            if prefix.is_empty() {
                return Err(ConfigError::InvalidValue("QUOTE_REF_PREFIX".to_string()));
            }
            draft.ref_prefix = prefix.to_string();
        }

        if let Some(value) = lookup("QUOTE_LAST_REF_NO") {
            draft.last_ref_no = parse_var("QUOTE_LAST_REF_NO", &value)?;
        }

        if let Some(value) = lookup("QUOTE_DEFAULT_GST_RATE") {
            draft.default_gst_rate = parse_rate("QUOTE_DEFAULT_GST_RATE", &value)?;
        }

        if let Some(value) = lookup("QUOTE_FREIGHT_GST_RATE") {
            draft.freight_gst_rate = parse_rate("QUOTE_FREIGHT_GST_RATE", &value)?;
        }

        Ok(CliConfig { draft })
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

fn parse_rate(name: &str, value: &str) -> Result<f64, ConfigError> {
    let rate: f64 = parse_var(name, value)?;
    if !(0.0..=100.0).contains(&rate) {
        return Err(ConfigError::InvalidValue(name.to_string()));
    }
    Ok(rate)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
