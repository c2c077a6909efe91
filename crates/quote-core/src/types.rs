//! # Domain Types
//!
//! Quotation data as the form produces it, plus the derived totals.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  QuotationData  │   │    LineItem     │   │     Client      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ref_no, date   │──►│  quantity       │   │  name           │       │
//! │  │  client         │   │  rate           │   │  address        │       │
//! │  │  products[]     │   │  gst_rate (%)   │   │  gst            │       │
//! │  │  freight        │   └─────────────────┘   └─────────────────┘       │
//! │  │  terms, bank    │                                                    │
//! │  └─────────────────┘                                                    │
//! │           │ pricing                                                     │
//! │           ▼                                                             │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │   LineTotals    │   │ QuotationTotals │   derived, never stored      │
//! │  │  base, gst,     │   │  sub, freight,  │                              │
//! │  │  total          │   │  grand, rounded │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase so the JSON matches what the form
//! frontend already reads and writes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;

// =============================================================================
// Line Item
// =============================================================================

/// One product or service row on the quotation.
///
/// Only `quantity`, `rate` and `gst_rate` take part in pricing. Nothing here
/// is range-checked; see [`crate::validation`] for optional checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Row identifier (UUID v4), stable while the form is edited.
    #[serde(default)]
    pub id: String,

    /// Product name, also used in the subject line.
    #[serde(default)]
    pub name: String,

    /// Model number.
    #[serde(default)]
    pub model: String,

    /// Free text, one feature per line.
    #[serde(default)]
    pub features: String,

    /// Number of units.
    pub quantity: f64,

    /// Price per unit before tax.
    pub rate: f64,

    /// GST percentage, e.g. `12.0` for 12%.
    pub gst_rate: f64,
}

impl LineItem {
    /// Creates an unnamed item with just the priced fields.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::types::LineItem;
    ///
    /// let item = LineItem::priced(2.0, 500.0, 12.0);
    /// assert_eq!(item.totals().total_amount, 1120.0);
    /// ```
    pub fn priced(quantity: f64, rate: f64, gst_rate: f64) -> Self {
        LineItem {
            id: String::new(),
            name: String::new(),
            model: String::new(),
            features: String::new(),
            quantity,
            rate,
            gst_rate,
        }
    }

    /// Returns the computed totals for this row.
    #[inline]
    pub fn totals(&self) -> LineTotals {
        crate::pricing::line_totals(self)
    }

    /// Feature lines with blank entries removed.
    pub fn feature_lines(&self) -> Vec<&str> {
        self.features
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

// =============================================================================
// Freight
// =============================================================================

/// Freight charge and the GST applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FreightInput {
    pub freight: f64,
    pub freight_gst_rate: f64,
}

impl FreightInput {
    pub fn new(freight: f64, freight_gst_rate: f64) -> Self {
        FreightInput {
            freight,
            freight_gst_rate,
        }
    }

    /// No freight at all; freight rows are hidden.
    pub fn none() -> Self {
        FreightInput::default()
    }
}

// =============================================================================
// Derived Totals
// =============================================================================

/// Computed figures for one line item.
///
/// `base_amount = quantity × rate`, `gst_amount = base × gst_rate / 100`,
/// `total_amount = base + gst`. Unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineTotals {
    pub base_amount: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
}

/// Computed figures for the whole quotation.
///
/// ## Invariants
/// - `rounded_grand_total` is `grand_total` rounded half away from zero
/// - `rounding_off == rounded_grand_total - grand_total`
/// - `has_freight` is true iff `freight != 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuotationTotals {
    /// Sum of every line's `total_amount`.
    pub sub_total: f64,

    /// Freight charge as entered.
    pub freight: f64,

    /// GST on freight; zero unless freight is positive.
    pub freight_gst_amount: f64,

    /// `sub_total + freight + freight_gst_amount`, unrounded.
    pub grand_total: f64,

    /// Grand total to the nearest rupee.
    pub rounded_grand_total: f64,

    /// Adjustment added to reach the rounded total. May be negative.
    pub rounding_off: f64,

    /// Whether the freight rows are shown.
    pub has_freight: bool,
}

impl QuotationTotals {
    /// Whether the "Rounding Off" row is shown.
    #[inline]
    pub fn shows_rounding_off(&self) -> bool {
        self.rounding_off != 0.0
    }
}

// =============================================================================
// Client & Catalogue
// =============================================================================

/// Addressee of the quotation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Client {
    pub name: String,
    /// Multi-line postal address.
    #[serde(default)]
    pub address: String,
    /// Client GST number; omitted from the document when empty.
    #[serde(default)]
    pub gst: String,
}

/// A product remembered from earlier quotations (no quantity, no row id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredProduct {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub features: String,
    pub rate: f64,
    pub gst_rate: f64,
}

// =============================================================================
// Terms & Bank Details
// =============================================================================

/// Editable commercial terms printed under the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Terms {
    pub payment: String,
    pub delivery: String,
    pub warranty: String,
}

impl Default for Terms {
    fn default() -> Self {
        Terms {
            payment: "50% advance with purchase order payable in the name of Sreemeditec and balance 50% on delivery of Machine.".to_string(),
            delivery: "Within 10 days from the date of the receipt of your purchase order.".to_string(),
            warranty: "Warranty against manufacturing defects for a period of one year from the date of delivery.".to_string(),
        }
    }
}

/// Account the client pays into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BankDetails {
    pub name: String,
    pub branch: String,
    pub acc_name: String,
    pub acc_type: String,
    pub acc_no: String,
    pub ifsc: String,
}

impl Default for BankDetails {
    fn default() -> Self {
        BankDetails {
            name: "ICICI Bank".to_string(),
            branch: "Selaiyur".to_string(),
            acc_name: "Sreemeditec,".to_string(),
            acc_type: "CA".to_string(),
            acc_no: "603705016939".to_string(),
            ifsc: "ICIC0006037".to_string(),
        }
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// A complete quotation as edited in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuotationData {
    /// Reference number, e.g. "SMQ 072".
    pub ref_no: String,

    /// Quotation date (ISO `YYYY-MM-DD` on the wire).
    #[ts(as = "String")]
    pub date: NaiveDate,

    pub client: Client,

    /// Line items in display order.
    pub products: Vec<LineItem>,

    #[serde(default)]
    pub terms: Terms,

    #[serde(default)]
    pub bank_details: BankDetails,

    /// Logo as a data URL; the company name is printed instead when absent.
    #[serde(default)]
    pub logo: Option<String>,

    /// Signature image as a data URL.
    #[serde(default)]
    pub signature: Option<String>,

    /// Company stamp image as a data URL.
    #[serde(default)]
    pub stamp: Option<String>,

    #[serde(default)]
    pub freight: f64,

    #[serde(default = "default_freight_gst_rate")]
    pub freight_gst_rate: f64,
}

fn default_freight_gst_rate() -> f64 {
    crate::DEFAULT_FREIGHT_GST_RATE
}

impl QuotationData {
    /// Decodes a quotation from its JSON form.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Freight fields as pricing input.
    #[inline]
    pub fn freight_input(&self) -> FreightInput {
        FreightInput::new(self.freight, self.freight_gst_rate)
    }

    /// Totals for the whole quotation.
    pub fn totals(&self) -> QuotationTotals {
        crate::pricing::compute_totals(&self.products, &self.freight_input())
    }

    /// Totals for each line item, in order.
    pub fn line_totals(&self) -> Vec<LineTotals> {
        crate::pricing::compute_line_totals(&self.products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
