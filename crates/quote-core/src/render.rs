//! # Text Rendition
//!
//! A plain-text, printable version of a quotation. It reads every figure
//! from a [`QuotationSummary`], never from its own arithmetic.
//!
//! ## Section Order
//! ```text
//!   letterhead ─► title ─► ref / date ─► client ─► subject ─► greeting
//!        ─► product rows ─► totals ─► terms ─► closing ─► signatory
//! ```

use serde::{Deserialize, Serialize};

use crate::summary::QuotationSummary;
use crate::types::QuotationData;

const PAGE_WIDTH: usize = 80;
const TOTALS_LABEL_WIDTH: usize = 58;
const TOTALS_AMOUNT_WIDTH: usize = PAGE_WIDTH - TOTALS_LABEL_WIDTH;

const GREETING: &str = "Sir, this is with ref to the discussion we had with you we are happy in submitting our quotation for the same.";
const VALIDITY: &str =
    "The above price is valid up to 30 days from the date of submission of the Quotation.";
const TAXES: &str = "GST is applicable to the price mentioned as per item-wise rates.";
const CLOSING: &str = "Thanking you and looking forward for your order.";

// =============================================================================
// Letterhead
// =============================================================================

/// Issuer details printed at the top and in the signature block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letterhead {
    pub company: String,
    pub address: String,
    pub phone: String,
    pub gst_no: String,
    pub signatory: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Letterhead {
            company: "SREE MEDITEC".to_string(),
            address: "New No: 18, Old No: 2, Bajanai Koil Street, Rajajipakkam, Chennai 600 073."
                .to_string(),
            phone: "9884818398".to_string(),
            gst_no: "33APGPS4675G2ZL".to_string(),
            signatory: "S. Suresh Kumar.".to_string(),
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Renders the quotation as text.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use quote_core::quotation::DraftSettings;
/// use quote_core::render::{render_text, Letterhead};
/// use quote_core::summary::QuotationSummary;
/// use quote_core::types::QuotationData;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let mut quotation = QuotationData::new_draft(&DraftSettings::default(), date);
/// quotation.products[0].rate = 500.0;
///
/// let summary = QuotationSummary::build(&quotation);
/// let text = render_text(&quotation, &summary, &Letterhead::default());
///
/// assert!(text.contains("Ref: SMQ 072"));
/// assert!(text.contains("Grand Total:"));
/// assert!(text.contains("Rs.560.00"));
/// ```
pub fn render_text(
    quotation: &QuotationData,
    summary: &QuotationSummary,
    letterhead: &Letterhead,
) -> String {
    let mut out: Vec<String> = Vec::new();

    // Letterhead
    if quotation.logo.is_some() {
        out.push(centered("[logo]"));
    } else {
        out.push(centered(&letterhead.company));
    }
    out.push(centered(&letterhead.address));
    out.push(centered(&format!("Mob: {}.", letterhead.phone)));
    out.push(centered(&format!("GST NO: {}", letterhead.gst_no)));
    out.push(String::new());
    out.push(centered("Quotation"));
    out.push(centered("---------"));
    out.push(String::new());

    let ref_line = format!("Ref: {}", quotation.ref_no);
    let date_line = format!("Date: {}", quotation.date);
    let gap = PAGE_WIDTH.saturating_sub(ref_line.len() + date_line.len()).max(1);
    out.push(format!("{}{}{}", ref_line, " ".repeat(gap), date_line));
    out.push(String::new());

    // Client
    out.push("To,".to_string());
    out.push(quotation.client.name.clone());
    out.extend(quotation.client.address.lines().map(str::to_string));
    if !quotation.client.gst.is_empty() {
        out.push(format!("GST: {}", quotation.client.gst));
    }
    out.push(String::new());

    out.push(quotation.subject_line());
    out.push(String::new());
    out.push(GREETING.to_string());
    out.push(String::new());

    // Products
    for (index, row) in summary.lines.iter().enumerate() {
        if row.model.is_empty() {
            out.push(format!("{}. {}", index + 1, row.name));
        } else {
            out.push(format!("{}. {} (Model: {})", index + 1, row.name, row.model));
        }
        out.extend(row.features.iter().map(|f| format!("   • {}", f)));
        out.push(format!(
            "   Qty: {}   Rate: {}   GST: {}   GST Amount: {}",
            row.quantity, row.rate, row.gst_rate, row.gst_amount
        ));
        out.push(format!("   Amount: {}", row.total));
        if !row.total_in_words.is_empty() {
            out.push(format!("   ({})", row.total_in_words));
        }
        out.push(String::new());
    }

    // Totals
    for row in &summary.totals_rows {
        out.push(totals_line(&format!("{}:", row.label), &row.amount));
    }
    out.push(format!(
        "{}{}",
        " ".repeat(TOTALS_LABEL_WIDTH - 20),
        "-".repeat(TOTALS_AMOUNT_WIDTH + 20)
    ));
    out.push(totals_line("Grand Total:", &summary.grand_total));
    if !summary.grand_total_in_words.is_empty() {
        out.push(format!("({})", summary.grand_total_in_words));
    }
    out.push(String::new());

    // Terms
    let bank = &quotation.bank_details;
    let banking = [
        format!("Bank name: {}", bank.name),
        format!("Branch name: {}", bank.branch),
        format!("A/C name: {}", bank.acc_name),
        format!("A/C type: {}", bank.acc_type),
        format!("A/C No: {}", bank.acc_no),
        format!("IFSC Code: {}", bank.ifsc),
    ]
    .join("\n");

    let terms: [(&str, &str); 6] = [
        ("Validity", VALIDITY),
        ("Taxes", TAXES),
        ("Payment", quotation.terms.payment.as_str()),
        ("Banking details", banking.as_str()),
        ("Delivery", quotation.terms.delivery.as_str()),
        ("Warranty", quotation.terms.warranty.as_str()),
    ];
    let label_width = terms.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    out.push("Terms and condition:".to_string());
    for (label, value) in terms {
        let mut lines = value.lines();
        let first = lines.next().unwrap_or("");
        out.push(format!("  {:<width$} : {}", label, first, width = label_width));
        for line in lines {
            out.push(format!("  {:<width$}   {}", "", line, width = label_width));
        }
    }
    out.push(String::new());

    // Closing
    out.push(CLOSING.to_string());
    out.push(String::new());
    out.push("With Regards,".to_string());
    out.push(format!("For {},", letterhead.company));
    match (quotation.stamp.is_some(), quotation.signature.is_some()) {
        (true, true) => out.push("[stamp + signature]".to_string()),
        (true, false) => out.push("[stamp]".to_string()),
        (false, true) => out.push("[signature]".to_string()),
        (false, false) => out.push(String::new()),
    }
    out.push(letterhead.signatory.clone());
    out.push(letterhead.phone.clone());

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = PAGE_WIDTH)
        .trim_end()
        .to_string()
}

fn totals_line(label: &str, amount: &str) -> String {
    format!(
        "{:>label_width$}{:>amount_width$}",
        label,
        amount,
        label_width = TOTALS_LABEL_WIDTH,
        amount_width = TOTALS_AMOUNT_WIDTH
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotation::DraftSettings;
    use crate::types::LineItem;
    use chrono::NaiveDate;

    fn sample() -> QuotationData {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut quotation = QuotationData::new_draft(&DraftSettings::default(), date);
        quotation.client.name = "City Hospital".to_string();
        quotation.client.address = "12 Main Road\nChennai".to_string();
        quotation.client.gst = "33ABCDE1234F1Z5".to_string();

        let mut item = LineItem::priced(2.0, 500.0, 12.0);
        item.name = "ECG Machine".to_string();
        item.model = "E-12".to_string();
        item.features = "12 channel\nThermal printer".to_string();
        quotation.products = vec![item];
        quotation
    }

    #[test]
    fn test_render_contains_sections() {
        let quotation = sample();
        let summary = QuotationSummary::build(&quotation);
        let text = render_text(&quotation, &summary, &Letterhead::default());

        assert!(text.contains("SREE MEDITEC"));
        assert!(text.contains("Date: 2024-03-15"));
        assert!(text.contains("GST: 33ABCDE1234F1Z5"));
        assert!(text.contains("Sub: Reg. Price Quotation for ECG Machine."));
        assert!(text.contains("1. ECG Machine (Model: E-12)"));
        assert!(text.contains("   • Thermal printer"));
        assert!(text.contains("(One thousand one hundred twenty only)"));
        assert!(text.contains("IFSC Code: ICIC0006037"));
        assert!(text.ends_with("9884818398\n"));
    }

    #[test]
    fn test_render_hides_freight_when_zero() {
        let quotation = sample();
        let summary = QuotationSummary::build(&quotation);
        let text = render_text(&quotation, &summary, &Letterhead::default());

        assert!(!text.contains("Freight"));
        assert!(!text.contains("Rounding Off"));
    }

    #[test]
    fn test_render_shows_freight_rows() {
        let mut quotation = sample();
        quotation.freight = 150.0;
        let summary = QuotationSummary::build(&quotation);
        let text = render_text(&quotation, &summary, &Letterhead::default());

        assert!(text.contains("Freight:"));
        assert!(text.contains("GST @ 18% on Freight:"));
    }

    #[test]
    fn test_totals_line_alignment() {
        let line = totals_line("Sub Total:", "Rs.1,120.00");
        assert_eq!(line.len(), PAGE_WIDTH);
        assert!(line.ends_with("Rs.1,120.00"));
    }
}
