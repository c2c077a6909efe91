//! # Pricing Engine
//!
//! Turns line items and freight into the figures printed on a quotation.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quotation Totals                                     │
//! │                                                                         │
//! │  for each LineItem:                                                     │
//! │     base  = quantity × rate                                             │
//! │     gst   = base × gst_rate / 100                                       │
//! │     total = base + gst                                                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  sub_total         = Σ total                                            │
//! │  freight_gst       = freight > 0 ? freight × freight_gst_rate / 100 : 0 │
//! │  grand_total       = sub_total + freight + freight_gst                  │
//! │  rounded           = round(grand_total)   (half away from zero)         │
//! │  rounding_off      = rounded − grand_total                              │
//! │                                                                         │
//! │  Nothing is rounded before the last two steps.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure. The preview and the exported document call
//! the same functions, so the same inputs always give bit-identical figures.
//! Inputs are not validated: negative or fractional numbers are priced
//! as-is, and non-finite numbers give unspecified (but non-panicking) output.

use crate::money::round_half_away_from_zero;
use crate::types::{FreightInput, LineItem, LineTotals, QuotationTotals};

/// Computes base, GST and total for one line item.
///
/// ## Example
/// ```rust
/// use quote_core::pricing::line_totals;
/// use quote_core::types::LineItem;
///
/// let totals = line_totals(&LineItem::priced(3.0, 250.0, 18.0));
/// assert_eq!(totals.base_amount, 750.0);
/// assert_eq!(totals.gst_amount, 135.0);
/// assert_eq!(totals.total_amount, 885.0);
/// ```
pub fn line_totals(item: &LineItem) -> LineTotals {
    let base_amount = item.quantity * item.rate;
    let gst_amount = base_amount * (item.gst_rate / 100.0);
    LineTotals {
        base_amount,
        gst_amount,
        total_amount: base_amount + gst_amount,
    }
}

/// Computes [`LineTotals`] for every item, in order.
pub fn compute_line_totals(items: &[LineItem]) -> Vec<LineTotals> {
    items.iter().map(line_totals).collect()
}

/// Computes the quotation totals.
///
/// ## Freight
/// Freight tax is only charged on a positive freight. A freight of exactly
/// zero also hides the freight rows (`has_freight == false`), whatever the
/// freight GST rate says.
///
/// ## Example
/// ```rust
/// use quote_core::pricing::compute_totals;
/// use quote_core::types::{FreightInput, LineItem};
///
/// let items = [LineItem::priced(1.0, 999.5, 0.0)];
/// let totals = compute_totals(&items, &FreightInput::new(100.0, 18.0));
///
/// assert_eq!(totals.freight_gst_amount, 18.0);
/// assert_eq!(totals.grand_total, 1117.5);
/// assert_eq!(totals.rounded_grand_total, 1118.0);
/// assert_eq!(totals.rounding_off, 0.5);
/// assert!(totals.has_freight);
/// ```
pub fn compute_totals(items: &[LineItem], freight: &FreightInput) -> QuotationTotals {
    let sub_total: f64 = items.iter().map(|item| line_totals(item).total_amount).sum();

    let freight_gst_amount = if freight.freight > 0.0 {
        freight.freight * (freight.freight_gst_rate / 100.0)
    } else {
        0.0
    };

    let grand_total = sub_total + freight.freight + freight_gst_amount;
    let rounded_grand_total = round_half_away_from_zero(grand_total);

    QuotationTotals {
        sub_total,
        freight: freight.freight,
        freight_gst_amount,
        grand_total,
        rounded_grand_total,
        rounding_off: rounded_grand_total - grand_total,
        has_freight: freight.freight != 0.0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_line_totals_formula() {
        let cases = [
            (1.0, 100.0, 0.0),
            (2.0, 500.0, 12.0),
            (7.0, 33.33, 18.0),
            (15.0, 1234.56, 28.0),
            (0.0, 999.0, 5.0),
            (3.0, 0.0, 12.0),
            (1.0, 10.0, 100.0),
        ];

        for (quantity, rate, gst_rate) in cases {
            let totals = line_totals(&LineItem::priced(quantity, rate, gst_rate));
            let expected = quantity * rate * (1.0 + gst_rate / 100.0);
            assert!(
                approx(totals.total_amount, expected),
                "{quantity} x {rate} @ {gst_rate}%: {} != {expected}",
                totals.total_amount
            );
            assert_eq!(totals.total_amount, totals.base_amount + totals.gst_amount);
        }
    }

    #[test]
    fn test_line_totals_are_not_rounded() {
        let totals = line_totals(&LineItem::priced(3.0, 33.33, 18.0));
        assert!(approx(totals.total_amount, 117.9882));
    }

    #[test]
    fn test_empty_items() {
        let totals = compute_totals(&[], &FreightInput::none());
        assert_eq!(totals.sub_total, 0.0);
        assert_eq!(totals.grand_total, 0.0);
        assert_eq!(totals.rounded_grand_total, 0.0);
        assert_eq!(totals.rounding_off, 0.0);
        assert!(!totals.has_freight);
    }

    #[test]
    fn test_empty_items_with_freight() {
        let totals = compute_totals(&[], &FreightInput::new(250.0, 18.0));
        assert_eq!(totals.sub_total, 0.0);
        assert_eq!(totals.freight_gst_amount, 45.0);
        assert_eq!(totals.grand_total, 295.0);
    }

    #[test]
    fn test_zero_freight_hides_rows_regardless_of_rate() {
        for rate in [0.0, 5.0, 18.0, 100.0] {
            let totals = compute_totals(
                &[LineItem::priced(1.0, 100.0, 12.0)],
                &FreightInput::new(0.0, rate),
            );
            assert!(!totals.has_freight);
            assert_eq!(totals.freight_gst_amount, 0.0);
        }
    }

    #[test]
    fn test_negative_freight_is_shown_but_untaxed() {
        let totals = compute_totals(&[], &FreightInput::new(-50.0, 18.0));
        assert!(totals.has_freight);
        assert_eq!(totals.freight_gst_amount, 0.0);
        assert_eq!(totals.grand_total, -50.0);
    }

    #[test]
    fn test_negative_and_fractional_inputs_are_priced() {
        let items = [
            LineItem::priced(-1.0, 100.0, 10.0),
            LineItem::priced(2.5, 40.0, 12.0),
        ];
        let totals = compute_totals(&items, &FreightInput::none());
        assert!(approx(totals.sub_total, -110.0 + 112.0));
    }

    #[test]
    fn test_rounding_off_bounds() {
        let rates = [0.01, 0.49, 0.5, 0.51, 0.99, 12.345, 99.995];
        for rate in rates {
            let totals = compute_totals(
                &[LineItem::priced(1.0, rate, 0.0)],
                &FreightInput::none(),
            );
            assert!(totals.rounding_off.abs() <= 0.5, "rate {rate}");
            assert_eq!(
                totals.rounding_off,
                totals.rounded_grand_total - totals.grand_total
            );
        }
    }

    #[test]
    fn test_rounding_off_sign() {
        let down = compute_totals(&[LineItem::priced(1.0, 100.4, 0.0)], &FreightInput::none());
        assert_eq!(down.rounded_grand_total, 100.0);
        assert!(down.rounding_off < 0.0);
        assert!(down.shows_rounding_off());

        let up = compute_totals(&[LineItem::priced(1.0, 100.6, 0.0)], &FreightInput::none());
        assert_eq!(up.rounded_grand_total, 101.0);
        assert!(up.rounding_off > 0.0);

        let exact = compute_totals(&[LineItem::priced(1.0, 100.0, 0.0)], &FreightInput::none());
        assert!(!exact.shows_rounding_off());
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        let totals = compute_totals(&[LineItem::priced(1.0, 2.5, 0.0)], &FreightInput::none());
        assert_eq!(totals.rounded_grand_total, 3.0);
        assert_eq!(totals.rounding_off, 0.5);
    }

    #[test]
    fn test_compute_totals_is_repeatable() {
        let items = [
            LineItem::priced(3.0, 33.33, 18.0),
            LineItem::priced(1.0, 1999.99, 12.0),
        ];
        let freight = FreightInput::new(120.0, 18.0);

        let first = compute_totals(&items, &freight);
        let second = compute_totals(&items, &freight);
        assert_eq!(first.grand_total.to_bits(), second.grand_total.to_bits());
        assert_eq!(first.rounding_off.to_bits(), second.rounding_off.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_line_totals_preserves_order() {
        let items = [
            LineItem::priced(1.0, 10.0, 0.0),
            LineItem::priced(1.0, 20.0, 0.0),
        ];
        let lines = compute_line_totals(&items);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].total_amount, 10.0);
        assert_eq!(lines[1].total_amount, 20.0);
    }
}
