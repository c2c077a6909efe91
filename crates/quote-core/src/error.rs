//! # Error Types
//!
//! Domain-specific error types for quote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quote-core errors (this file)                                         │
//! │  ├── CoreError        - Amounts that cannot be put into words,         │
//! │  │                      malformed quotation JSON                       │
//! │  └── ValidationError  - Optional input checks (validation module)      │
//! │                                                                         │
//! │  quote-cli errors (separate crate)                                     │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing itself never fails: it is total over finite inputs. Only the
//! words renderer and the optional validators produce errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core quotation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Amount in words was requested for a negative number.
    ///
    /// ## When This Occurs
    /// - A line item with a negative rate or quantity reaches the renderer
    /// - A rounding-off value is passed directly to the renderer
    #[error("Cannot write a negative amount in words: {0}")]
    NegativeAmount(f64),

    /// Amount is NaN or infinite.
    #[error("Amount is not a finite number")]
    NonFiniteAmount,

    /// Integer part does not fit the words renderer's range.
    #[error("Amount is too large to write in words: {0}")]
    AmountTooLarge(String),

    /// Quotation JSON could not be decoded.
    #[error("Invalid quotation JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only raised by the opt-in checks in [`crate::validation`]; the pricing
/// engine computes whatever it is given.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
