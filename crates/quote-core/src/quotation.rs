//! # Quotation Scaffolding
//!
//! Reference numbers, new drafts, and the text derived from a quotation's
//! products (subject line, export file name).
//!
//! ## Reference Number Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  last_ref_no = 71                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  new_draft() ──► ref_no = "SMQ 072"   (user may edit it freely)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  export ──► next_last_ref_no(71, "SMQ 072") = 72                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  new_draft() ──► ref_no = "SMQ 073"                                     │
//! │                                                                         │
//! │  An edited ref without digits leaves the counter where it was; one     │
//! │  with a lower number never moves it backwards.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{BankDetails, Client, LineItem, QuotationData, StoredProduct, Terms};
use crate::{DEFAULT_FREIGHT_GST_RATE, DEFAULT_GST_RATE, DEFAULT_LAST_REF_NO, DEFAULT_REF_PREFIX};

// =============================================================================
// Draft Settings
// =============================================================================

/// Values a new draft starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSettings {
    /// Reference-number prefix ("SMQ").
    pub ref_prefix: String,

    /// Highest reference number already issued.
    pub last_ref_no: u32,

    /// GST % for a new blank line item.
    pub default_gst_rate: f64,

    /// GST % applied to freight.
    pub freight_gst_rate: f64,
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            ref_prefix: DEFAULT_REF_PREFIX.to_string(),
            last_ref_no: DEFAULT_LAST_REF_NO,
            default_gst_rate: DEFAULT_GST_RATE,
            freight_gst_rate: DEFAULT_FREIGHT_GST_RATE,
        }
    }
}

// =============================================================================
// Reference Numbers
// =============================================================================

/// Formats a reference number, zero-padded to three digits.
///
/// ## Example
/// ```rust
/// use quote_core::quotation::format_ref_no;
///
/// assert_eq!(format_ref_no("SMQ", 72), "SMQ 072");
/// assert_eq!(format_ref_no("SMQ", 1234), "SMQ 1234");
/// ```
pub fn format_ref_no(prefix: &str, number: u32) -> String {
    format!("{} {:03}", prefix, number)
}

/// Reads the number out of a reference by joining all of its digits.
///
/// Returns `None` when the reference has no digits or the digits overflow.
///
/// ## Example
/// ```rust
/// use quote_core::quotation::parse_ref_number;
///
/// assert_eq!(parse_ref_number("SMQ 072"), Some(72));
/// assert_eq!(parse_ref_number("SMQ/2024/15"), Some(202415));
/// assert_eq!(parse_ref_number("DRAFT"), None);
/// ```
pub fn parse_ref_number(ref_no: &str) -> Option<u32> {
    let digits: String = ref_no.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// The last-issued counter after exporting a quotation with `issued_ref`.
pub fn next_last_ref_no(last_ref_no: u32, issued_ref: &str) -> u32 {
    match parse_ref_number(issued_ref) {
        Some(issued) => last_ref_no.max(issued),
        None => last_ref_no,
    }
}

// =============================================================================
// Line Item Constructors
// =============================================================================

impl LineItem {
    /// An empty row as added by "Add product": quantity 1, rate 0.
    pub fn blank(gst_rate: f64) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            ..LineItem::priced(1.0, 0.0, gst_rate)
        }
    }

    /// A row filled in from a remembered catalogue product.
    pub fn from_stored(product: &StoredProduct) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            name: product.name.clone(),
            model: product.model.clone(),
            features: product.features.clone(),
            quantity: 1.0,
            rate: product.rate,
            gst_rate: product.gst_rate,
        }
    }
}

// =============================================================================
// Quotation Helpers
// =============================================================================

impl QuotationData {
    /// A fresh quotation: next reference number, default terms and bank
    /// details, one blank line item, no freight, no images.
    pub fn new_draft(settings: &DraftSettings, date: NaiveDate) -> Self {
        QuotationData {
            ref_no: format_ref_no(&settings.ref_prefix, settings.last_ref_no.saturating_add(1)),
            date,
            client: Client::default(),
            products: vec![LineItem::blank(settings.default_gst_rate)],
            terms: Terms::default(),
            bank_details: BankDetails::default(),
            logo: None,
            signature: None,
            stamp: None,
            freight: 0.0,
            freight_gst_rate: settings.freight_gst_rate,
        }
    }

    /// The "Sub:" line naming every product.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::types::{LineItem, QuotationData};
    /// use quote_core::quotation::DraftSettings;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let mut quotation = QuotationData::new_draft(&DraftSettings::default(), date);
    /// quotation.products[0].name = "ECG Machine".to_string();
    /// let mut second = LineItem::blank(12.0);
    /// second.name = "Trolley".to_string();
    /// quotation.products.push(second);
    ///
    /// assert_eq!(
    ///     quotation.subject_line(),
    ///     "Sub: Reg. Price Quotation for ECG Machine and Trolley."
    /// );
    /// ```
    pub fn subject_line(&self) -> String {
        let names: Vec<&str> = self.products.iter().map(|p| p.name.as_str()).collect();
        format!("Sub: Reg. Price Quotation for {}.", names.join(" and "))
    }

    /// File name for the exported document; slashes become hyphens.
    pub fn export_file_name(&self) -> String {
        format!("Quotation-{}.pdf", self.ref_no.replace('/', "-"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_format_ref_no() {
        assert_eq!(format_ref_no("SMQ", 1), "SMQ 001");
        assert_eq!(format_ref_no("SMQ", 72), "SMQ 072");
        assert_eq!(format_ref_no("Q", 999), "Q 999");
    }

    #[test]
    fn test_parse_ref_number() {
        assert_eq!(parse_ref_number("SMQ 072"), Some(72));
        assert_eq!(parse_ref_number("072"), Some(72));
        assert_eq!(parse_ref_number(""), None);
        assert_eq!(parse_ref_number("SMQ"), None);
        assert_eq!(parse_ref_number("SMQ 99999999999"), None);
    }

    #[test]
    fn test_next_last_ref_no() {
        assert_eq!(next_last_ref_no(71, "SMQ 072"), 72);
        assert_eq!(next_last_ref_no(80, "SMQ 072"), 80);
        assert_eq!(next_last_ref_no(71, "DRAFT"), 71);
    }

    #[test]
    fn test_new_draft() {
        let settings = DraftSettings::default();
        let draft = QuotationData::new_draft(&settings, date());

        assert_eq!(draft.ref_no, "SMQ 072");
        assert_eq!(draft.date, date());
        assert_eq!(draft.products.len(), 1);
        assert_eq!(draft.products[0].quantity, 1.0);
        assert_eq!(draft.products[0].rate, 0.0);
        assert_eq!(draft.products[0].gst_rate, DEFAULT_GST_RATE);
        assert!(!draft.products[0].id.is_empty());
        assert_eq!(draft.freight, 0.0);
        assert_eq!(draft.freight_gst_rate, DEFAULT_FREIGHT_GST_RATE);
        assert_eq!(draft.terms, Terms::default());
        assert!(draft.stamp.is_none());
    }

    #[test]
    fn test_draft_follows_exported_ref() {
        let mut settings = DraftSettings::default();
        let first = QuotationData::new_draft(&settings, date());
        settings.last_ref_no = next_last_ref_no(settings.last_ref_no, &first.ref_no);

        let second = QuotationData::new_draft(&settings, date());
        assert_eq!(second.ref_no, "SMQ 073");
    }

    #[test]
    fn test_blank_items_get_distinct_ids() {
        let a = LineItem::blank(12.0);
        let b = LineItem::blank(12.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_from_stored() {
        let stored = StoredProduct {
            name: "Pulse Oximeter".to_string(),
            model: "PX-2".to_string(),
            features: "OLED display".to_string(),
            rate: 1500.0,
            gst_rate: 12.0,
        };
        let item = LineItem::from_stored(&stored);
        assert_eq!(item.name, "Pulse Oximeter");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.rate, 1500.0);
        assert_eq!(item.gst_rate, 12.0);
    }

    #[test]
    fn test_export_file_name() {
        let mut quotation = QuotationData::new_draft(&DraftSettings::default(), date());
        quotation.ref_no = "SMQ/2024/015".to_string();
        assert_eq!(quotation.export_file_name(), "Quotation-SMQ-2024-015.pdf");
    }
}
