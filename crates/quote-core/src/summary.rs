//! # Quotation Summary
//!
//! The display model both the screen preview and the exported document are
//! drawn from. Building it is the only place figures get formatted, so the
//! two outputs cannot drift apart.
//!
//! ## Layout Fed By This Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Product │ Model │ Features │ Qty  │ Rate      │ GST % │ GST Amt │ Amount│
//! ├─────────┼───────┼──────────┼──────┼───────────┼───────┼─────────┼───────┤
//! │ LineRow │  ...  │ • bullet │ 2 no │ Rs.500.00 │  12%  │ Rs.120… │ Rs.1,…│
//! │         │       │          │      │           │       │         │(words)│
//! └─────────────────────────────────────────────────────────────────────────┘
//!                                      Sub Total:               Rs.1,120.00
//!                                      Freight:            ┐ only when
//!                                      GST @ 18% on Freight┘ has_freight
//!                                      Rounding Off:         only when ≠ 0
//!                                      ─────────────────────────────────────
//!                                      Grand Total:             Rs.1,120.00
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{format_percent, Rupees};
use crate::types::{LineItem, LineTotals, QuotationData, QuotationTotals};
use crate::words::to_words;

// =============================================================================
// Rows
// =============================================================================

/// One formatted product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineRow {
    pub name: String,
    pub model: String,
    /// Feature bullets, blank lines dropped.
    pub features: Vec<String>,
    /// Quantity label, e.g. "2 no".
    pub quantity: String,
    pub rate: String,
    pub gst_rate: String,
    pub gst_amount: String,
    pub total: String,
    /// Line total in words; empty when the total cannot be written out.
    pub total_in_words: String,
    /// Unformatted figures behind the strings.
    pub totals: LineTotals,
}

impl LineRow {
    fn build(item: &LineItem) -> Self {
        let totals = item.totals();
        LineRow {
            name: item.name.clone(),
            model: item.model.clone(),
            features: item.feature_lines().into_iter().map(str::to_string).collect(),
            quantity: format!("{} no", item.quantity),
            rate: Rupees::new(item.rate).to_string(),
            gst_rate: format_percent(item.gst_rate),
            gst_amount: Rupees::new(totals.gst_amount).to_string(),
            total: Rupees::new(totals.total_amount).to_string(),
            total_in_words: words_or_empty(totals.total_amount),
            totals,
        }
    }
}

/// A label/amount pair above the grand total rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TotalsRow {
    pub label: String,
    pub amount: String,
}

impl TotalsRow {
    fn new(label: impl Into<String>, amount: f64) -> Self {
        TotalsRow {
            label: label.into(),
            amount: Rupees::new(amount).to_string(),
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Everything a renderer needs to print the figures of a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuotationSummary {
    pub lines: Vec<LineRow>,

    /// Sub total, then the optional freight and rounding rows.
    pub totals_rows: Vec<TotalsRow>,

    /// Rounded grand total, formatted.
    pub grand_total: String,

    pub grand_total_in_words: String,

    /// Unformatted figures behind the strings.
    pub totals: QuotationTotals,
}

impl QuotationSummary {
    /// Prices the quotation and formats every figure.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::summary::QuotationSummary;
    /// use quote_core::types::QuotationData;
    ///
    /// let quotation = QuotationData::from_json(r#"{
    ///     "refNo": "SMQ 072", "date": "2024-03-15",
    ///     "client": { "name": "City Hospital", "address": "Chennai" },
    ///     "products": [{ "name": "ECG Machine", "quantity": 2, "rate": 500, "gstRate": 12 }],
    ///     "freight": 0
    /// }"#).unwrap();
    ///
    /// let summary = QuotationSummary::build(&quotation);
    /// assert_eq!(summary.lines[0].total, "Rs.1,120.00");
    /// assert_eq!(summary.totals_rows.len(), 1); // Sub Total only
    /// assert_eq!(summary.grand_total, "Rs.1,120.00");
    /// ```
    pub fn build(quotation: &QuotationData) -> Self {
        let totals = quotation.totals();

        let mut totals_rows = vec![TotalsRow::new("Sub Total", totals.sub_total)];
        if totals.has_freight {
            totals_rows.push(TotalsRow::new("Freight", totals.freight));
            totals_rows.push(TotalsRow::new(
                format!("GST @ {} on Freight", format_percent(quotation.freight_gst_rate)),
                totals.freight_gst_amount,
            ));
        }
        if totals.shows_rounding_off() {
            totals_rows.push(TotalsRow::new("Rounding Off", totals.rounding_off));
        }

        QuotationSummary {
            lines: quotation.products.iter().map(LineRow::build).collect(),
            totals_rows,
            grand_total: Rupees::new(totals.rounded_grand_total).to_string(),
            grand_total_in_words: words_or_empty(totals.rounded_grand_total),
            totals,
        }
    }

    /// Line rows whose total could not be written in words.
    pub fn lines_without_words(&self) -> impl Iterator<Item = &LineRow> {
        self.lines
            .iter()
            .filter(|line| line.total_in_words.is_empty())
    }
}

/// Amounts the renderer rejects (negative, non-finite) show no words.
fn words_or_empty(amount: f64) -> String {
    to_words(Some(amount)).unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
