//! # quote-core: Pure Quotation Arithmetic
//!
//! Everything a quotation needs to turn line items into figures: per-line
//! GST, freight tax, the rounded grand total, and the amount written out in
//! words. No I/O happens here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quotation Generator                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Form (client, products, freight, terms)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ QuotationData                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quote-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   words   │  │   money   │  │  summary  │  │   │
//! │  │   │ LineTotals│  │ lakh/crore│  │  Rupees   │  │  LineRow  │  │   │
//! │  │   │  Totals   │  │   paise   │  │  Rs.1,234 │  │ TotalsRow │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ QuotationSummary                       │
//! │                 ┌──────────────┴──────────────┐                         │
//! │                 ▼                             ▼                         │
//! │        Screen preview                 Exported document                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Quotation data (line items, client, terms, bank details)
//! - [`pricing`] - Line and quotation totals
//! - [`words`] - Amount in words (Indian numbering)
//! - [`money`] - `Rupees` and currency formatting
//! - [`quotation`] - Reference numbers and new drafts
//! - [`summary`] - Display model shared by preview and export
//! - [`render`] - Plain-text rendition of a quotation
//! - [`validation`] - Optional input checks for callers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use quote_core::pricing::compute_totals;
//! use quote_core::types::{FreightInput, LineItem};
//! use quote_core::words::amount_in_words;
//!
//! let items = vec![LineItem::priced(2.0, 500.0, 12.0)];
//! let totals = compute_totals(&items, &FreightInput::none());
//!
//! assert_eq!(totals.rounded_grand_total, 1120.0);
//! assert!(!totals.has_freight);
//! assert_eq!(
//!     amount_in_words(totals.rounded_grand_total).unwrap(),
//!     "One thousand one hundred twenty only"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod quotation;
pub mod render;
pub mod summary;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Rupees;
pub use pricing::{compute_line_totals, compute_totals, line_totals};
pub use summary::QuotationSummary;
pub use types::*;
pub use words::{amount_in_words, to_words};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// GST rate given to a freshly added line item.
pub const DEFAULT_GST_RATE: f64 = 12.0;

/// GST rate applied to freight on a new quotation.
pub const DEFAULT_FREIGHT_GST_RATE: f64 = 18.0;

/// Prefix of every reference number ("SMQ 072").
pub const DEFAULT_REF_PREFIX: &str = "SMQ";

/// Last reference number issued before any quotation was saved locally.
pub const DEFAULT_LAST_REF_NO: u32 = 71;

/// Prefix printed in front of every currency amount.
pub const CURRENCY_PREFIX: &str = "Rs.";
