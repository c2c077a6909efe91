//! # Validation Module
//!
//! Optional input checks for whoever collects the quotation.
//!
//! ## Where Validation Lives
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form                                                         │
//! │  ├── Number inputs, empty-field hints                                  │
//! │  └── THIS MODULE, if the caller wants it                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing engine                                               │
//! │  └── No checks at all: prices whatever it is given                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Words renderer                                               │
//! │  └── Rejects negative / non-finite amounts with a typed error          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::types::LineItem;
//! use quote_core::validation::validate_line_item;
//!
//! assert!(validate_line_item(&LineItem::priced(2.0, 500.0, 12.0)).is_ok());
//! assert!(validate_line_item(&LineItem::priced(2.0, 500.0, 120.0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{LineItem, QuotationData};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

fn finite_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity: finite, not negative.
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    finite_non_negative("quantity", quantity)
}

/// Validates a unit rate: finite, not negative. Zero is allowed.
pub fn validate_rate(rate: f64) -> ValidationResult<()> {
    finite_non_negative("rate", rate)
}

/// Validates a GST percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be between 0 and 100 inclusive
///
/// ## Example
/// ```rust
/// use quote_core::validation::validate_gst_rate;
///
/// assert!(validate_gst_rate(0.0).is_ok());
/// assert!(validate_gst_rate(28.0).is_ok());
/// assert!(validate_gst_rate(100.0).is_ok());
/// assert!(validate_gst_rate(100.5).is_err());
/// ```
pub fn validate_gst_rate(gst_rate: f64) -> ValidationResult<()> {
    finite_non_negative("gstRate", gst_rate)?;

    if gst_rate > 100.0 {
        return Err(ValidationError::OutOfRange {
            field: "gstRate".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

/// Validates a freight charge: finite, not negative.
pub fn validate_freight(freight: f64) -> ValidationResult<()> {
    finite_non_negative("freight", freight)
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates the priced fields of one line item.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_quantity(item.quantity)?;
    validate_rate(item.rate)?;
    validate_gst_rate(item.gst_rate)
}

/// Validates a whole quotation before it is exported.
///
/// ## Rules
/// - Client name is required
/// - At least one product
/// - Every product passes [`validate_line_item`]
/// - Freight and freight GST rate are in range
pub fn validate_quotation(quotation: &QuotationData) -> ValidationResult<()> {
    if quotation.client.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "client name".to_string(),
        });
    }

    if quotation.products.is_empty() {
        return Err(ValidationError::Required {
            field: "products".to_string(),
        });
    }

    for item in &quotation.products {
        validate_line_item(item)?;
    }

    validate_freight(quotation.freight)?;
    validate_gst_rate(quotation.freight_gst_rate)
}

// =============================================================================
// Unit Tests
// =============================================================================
