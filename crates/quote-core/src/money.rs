//! # Money Module
//!
//! Provides the `Rupees` type used to display quotation amounts.
//!
//! ## Why Floats Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FULL PRECISION UNTIL THE LAST STEP                                     │
//! │                                                                         │
//! │  Line totals, subtotal and grand total carry every digit the           │
//! │  multiplication produced. Nothing is rounded to paise on the way:      │
//! │                                                                         │
//! │    3 × 33.33 @ 18%  = 117.9882   (not 117.99)                          │
//! │                                                                         │
//! │  Only two places ever round:                                            │
//! │    • Grand total → nearest rupee (half away from zero)                 │
//! │    • Display     → two decimals, Indian digit grouping                 │
//! │                                                                         │
//! │  The rounding-off row then shows exactly what the first step changed.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::money::Rupees;
//!
//! let total = Rupees::new(123456.78);
//! assert_eq!(total.to_string(), "Rs.1,23,456.78");
//! assert_eq!(total.round().value(), 123457.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::CURRENCY_PREFIX;

// =============================================================================
// Rupees Type
// =============================================================================

/// A rupee amount with paise as the fractional part.
///
/// ## Display
/// `Display` renders the amount the way the quotation prints it:
/// `Rs.` prefix, two fixed decimals, and Indian digit grouping
/// (last three digits, then pairs).
///
/// ```text
///   1234.5      → Rs.1,234.50
///   123456.78   → Rs.1,23,456.78
///   12345678.9  → Rs.1,23,45,678.90
///   -0.4        → -Rs.0.40
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rupees(f64);

impl Rupees {
    /// Wraps a raw amount.
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Rupees(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Rounds to the nearest whole rupee, halves away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Rupees;
    ///
    /// assert_eq!(Rupees::new(2.5).round().value(), 3.0);
    /// assert_eq!(Rupees::new(1120.49).round().value(), 1120.0);
    /// assert_eq!(Rupees::new(-2.5).round().value(), -3.0);
    /// ```
    #[inline]
    pub fn round(&self) -> Self {
        Rupees(round_half_away_from_zero(self.0))
    }
}

impl From<f64> for Rupees {
    fn from(amount: f64) -> Self {
        Rupees(amount)
    }
}

/// Display shows `Rs.` with Indian grouping and two decimals.
impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}{}", CURRENCY_PREFIX, self.0);
        }
        let (negative, grouped) = split_and_group(self.0);
        write!(
            f,
            "{}{}{}",
            if negative { "-" } else { "" },
            CURRENCY_PREFIX,
            grouped
        )
    }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Rounds to the nearest integer, with halves going away from zero.
///
/// No bankers rounding: `0.5 → 1`, `1.5 → 2`, `2.5 → 3`.
#[inline]
pub fn round_half_away_from_zero(amount: f64) -> f64 {
    amount.round()
}

/// Formats an amount with Indian digit grouping and two decimals, no prefix.
///
/// ## Example
/// ```rust
/// use quote_core::money::format_indian;
///
/// assert_eq!(format_indian(1234567.8), "12,34,567.80");
/// assert_eq!(format_indian(999.0), "999.00");
/// assert_eq!(format_indian(-1500.0), "-1,500.00");
/// ```
pub fn format_indian(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let (negative, grouped) = split_and_group(amount);
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a percentage in its shortest form: `12%`, `2.5%`.
pub fn format_percent(rate: f64) -> String {
    format!("{}%", rate)
}

/// Rounds to paise and groups the rupee digits.
///
/// Returns whether a minus sign is needed; an amount that rounds to zero
/// paise never gets one.
fn split_and_group(amount: f64) -> (bool, String) {
    // `as` saturates, so absurdly large amounts clamp instead of wrapping
    let paise = (amount.abs() * 100.0).round() as u128;
    let whole = paise / 100;
    let fraction = paise % 100;

    let negative = amount < 0.0 && paise != 0;
    (negative, format!("{}.{:02}", group_indian(whole), fraction))
}

/// Inserts commas: last three digits, then every two.
fn group_indian(whole: u128) -> String {
    let digits = whole.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rupees::new(0.0).to_string(), "Rs.0.00");
        assert_eq!(Rupees::new(5.0).to_string(), "Rs.5.00");
        assert_eq!(Rupees::new(1120.0).to_string(), "Rs.1,120.00");
        assert_eq!(Rupees::new(123456.78).to_string(), "Rs.1,23,456.78");
        assert_eq!(Rupees::new(12345678.9).to_string(), "Rs.1,23,45,678.90");
        assert_eq!(Rupees::new(-0.4).to_string(), "-Rs.0.40");
    }

    #[test]
    fn test_tiny_negative_has_no_sign() {
        // -0.001 rounds to zero paise
        assert_eq!(Rupees::new(-0.001).to_string(), "Rs.0.00");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(100000), "1,00,000");
        assert_eq!(group_indian(1000000), "10,00,000");
        assert_eq!(group_indian(10000000), "1,00,00,000");
        assert_eq!(group_indian(123456789012), "1,23,45,67,89,012");
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away_from_zero(0.5), 1.0);
        assert_eq!(round_half_away_from_zero(1.5), 2.0);
        assert_eq!(round_half_away_from_zero(2.5), 3.0);
        assert_eq!(round_half_away_from_zero(-0.5), -1.0);
        assert_eq!(round_half_away_from_zero(1120.4999), 1120.0);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.0), "12%");
        assert_eq!(format_percent(2.5), "2.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_is_zero() {
        assert!(Rupees::new(0.0).is_zero());
        assert!(!Rupees::new(0.01).is_zero());
        assert!(Rupees::default().is_zero());
    }
}
