//! # Amount in Words
//!
//! Writes a rupee amount out in English using the Indian numbering system,
//! the way it is printed next to every total on a quotation.
//!
//! ## Magnitude Bands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Indian grouping (NOT thousand / million / billion)                    │
//! │                                                                         │
//! │   crore     10,000,000   ──► words(n / 1e7) + " crore"  + words(rest)  │
//! │   lakh         100,000   ──► words(n / 1e5) + " lakh"   + words(rest)  │
//! │   thousand       1,000   ──► words(n / 1e3) + " thousand" + ...        │
//! │   hundred          100   ──► UNITS[n / 100] + " hundred"  + ...        │
//! │   1 – 99                 ──► UNITS / TENS tables                       │
//! │                                                                         │
//! │   12,34,56,789 → twelve crore thirty four lakh fifty six thousand      │
//! │                  seven hundred eighty nine                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Paise
//! The fractional part is taken from the number's shortest decimal form,
//! padded on the right to two digits and then cut to two. It is truncated,
//! never rounded: `0.999` gives ninety nine paise.
//!
//! ## Usage
//! ```rust
//! use quote_core::words::amount_in_words;
//!
//! assert_eq!(
//!     amount_in_words(1234.50).unwrap(),
//!     "One thousand two hundred thirty four and fifty paise only"
//! );
//! assert_eq!(amount_in_words(0.0).unwrap(), "Zero only");
//! ```

use crate::error::{CoreError, CoreResult};

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const HUNDRED: u128 = 100;
const THOUSAND: u128 = 1_000;
const LAKH: u128 = 100_000;
const CRORE: u128 = 10_000_000;

const ZERO_ONLY: &str = "Zero only";

/// Writes an optional amount in words.
///
/// An absent amount is passed through as an empty string; every present
/// amount is handed to [`amount_in_words`].
///
/// ## Example
/// ```rust
/// use quote_core::words::to_words;
///
/// assert_eq!(to_words(None).unwrap(), "");
/// assert_eq!(to_words(Some(100000.0)).unwrap(), "One lakh only");
/// ```
pub fn to_words(amount: Option<f64>) -> CoreResult<String> {
    match amount {
        Some(amount) => amount_in_words(amount),
        None => Ok(String::new()),
    }
}

/// Writes a non-negative amount in words, ending in " only".
///
/// ## Errors
/// - [`CoreError::NegativeAmount`] for amounts below zero
/// - [`CoreError::NonFiniteAmount`] for NaN and infinities
/// - [`CoreError::AmountTooLarge`] when the rupee part exceeds `u128`
pub fn amount_in_words(amount: f64) -> CoreResult<String> {
    if !amount.is_finite() {
        return Err(CoreError::NonFiniteAmount);
    }
    if amount < 0.0 {
        return Err(CoreError::NegativeAmount(amount));
    }
    if amount == 0.0 {
        return Ok(ZERO_ONLY.to_string());
    }

    // f64's Display is the shortest round-trip form and never uses exponents
    let repr = amount.to_string();
    let (rupee_digits, fraction_digits) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let rupees: u128 = rupee_digits
        .parse()
        .map_err(|_| CoreError::AmountTooLarge(rupee_digits.to_string()))?;
    let paise = paise_from_fraction(fraction_digits);

    let mut words = integer_words(rupees);
    if paise > 0 {
        if !words.is_empty() {
            words.push_str(" and ");
        }
        words.push_str(&integer_words(paise));
        words.push_str(" paise");
    }

    if words.is_empty() {
        return Ok(ZERO_ONLY.to_string());
    }

    let collapsed = words.split_whitespace().collect::<Vec<_>>().join(" ");
    Ok(format!("{} only", capitalize_first(&collapsed)))
}

/// First two fractional digits, right-padded with zeros.
fn paise_from_fraction(fraction_digits: &str) -> u128 {
    fraction_digits
        .chars()
        .chain(std::iter::repeat('0'))
        .take(2)
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, digit| acc * 10 + u128::from(digit))
}

/// Words for a whole number; empty for zero.
fn integer_words(n: u128) -> String {
    match n {
        0 => String::new(),
        1..=19 => UNITS[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                units => format!("{} {}", tens, UNITS[units as usize]),
            }
        }
        _ if n < THOUSAND => {
            with_remainder(format!("{} hundred", UNITS[(n / HUNDRED) as usize]), n % HUNDRED)
        }
        _ if n < LAKH => band(n, THOUSAND, "thousand"),
        _ if n < CRORE => band(n, LAKH, "lakh"),
        _ => band(n, CRORE, "crore"),
    }
}

fn band(n: u128, size: u128, name: &str) -> String {
    with_remainder(format!("{} {}", integer_words(n / size), name), n % size)
}

fn with_remainder(head: String, remainder: u128) -> String {
    if remainder == 0 {
        head
    } else {
        format!("{} {}", head, integer_words(remainder))
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn words(amount: f64) -> String {
        amount_in_words(amount).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(words(0.0), "Zero only");
        assert_eq!(words(-0.0), "Zero only");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(words(1.0), "One only");
        assert_eq!(words(13.0), "Thirteen only");
        assert_eq!(words(20.0), "Twenty only");
        assert_eq!(words(42.0), "Forty two only");
        assert_eq!(words(99.0), "Ninety nine only");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(words(100.0), "One hundred only");
        assert_eq!(words(101.0), "One hundred one only");
        assert_eq!(words(999.0), "Nine hundred ninety nine only");
    }

    #[test]
    fn test_indian_bands() {
        assert_eq!(words(1000.0), "One thousand only");
        assert_eq!(words(1120.0), "One thousand one hundred twenty only");
        assert_eq!(words(99999.0), "Ninety nine thousand nine hundred ninety nine only");
        assert_eq!(words(100000.0), "One lakh only");
        assert_eq!(words(250000.0), "Two lakh fifty thousand only");
        assert_eq!(words(10000000.0), "One crore only");
        assert_eq!(
            words(123456789.0),
            "Twelve crore thirty four lakh fifty six thousand seven hundred eighty nine only"
        );
    }

    #[test]
    fn test_crore_quotient_recurses() {
        assert_eq!(words(1000000000.0), "One hundred crore only");
        assert_eq!(words(1500000000000.0), "One lakh fifty thousand crore only");
    }

    #[test]
    fn test_paise() {
        assert_eq!(
            words(1234.50),
            "One thousand two hundred thirty four and fifty paise only"
        );
        assert_eq!(words(10.05), "Ten and five paise only");
        assert_eq!(words(0.5), "Fifty paise only");
        assert_eq!(words(0.75), "Seventy five paise only");
    }

    #[test]
    fn test_paise_are_truncated_not_rounded() {
        assert_eq!(words(0.999), "Ninety nine paise only");
        assert_eq!(words(5.129), "Five and twelve paise only");
        assert_eq!(words(10.009), "Ten only");
        assert_eq!(words(0.001), "Zero only");
    }

    #[test]
    fn test_absent_amount_is_empty() {
        assert_eq!(to_words(None).unwrap(), "");
        assert_eq!(to_words(Some(100.0)).unwrap(), "One hundred only");
    }

    #[test]
    fn test_negative_is_rejected() {
        let err = amount_in_words(-1.0).unwrap_err();
        assert!(matches!(err, CoreError::NegativeAmount(v) if v == -1.0));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(amount_in_words(f64::NAN), Err(CoreError::NonFiniteAmount)));
        assert!(matches!(
            amount_in_words(f64::INFINITY),
            Err(CoreError::NonFiniteAmount)
        ));
    }

    #[test]
    fn test_huge_amount_is_rejected() {
        assert!(matches!(
            amount_in_words(f64::MAX),
            Err(CoreError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_paise_from_fraction() {
        assert_eq!(paise_from_fraction(""), 0);
        assert_eq!(paise_from_fraction("5"), 50);
        assert_eq!(paise_from_fraction("05"), 5);
        assert_eq!(paise_from_fraction("12345"), 12);
    }
}
