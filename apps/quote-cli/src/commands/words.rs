//! `quote words <AMOUNT>`

use clap::Args;
use quote_core::amount_in_words;
use tracing::debug;

use crate::error::CliResult;

#[derive(Debug, Args)]
pub struct WordsArgs {
    /// Amount in rupees, e.g. 1234.50
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
}

pub fn run(args: WordsArgs) -> CliResult<String> {
    debug!(amount = args.amount, "words command");
    Ok(amount_in_words(args.amount)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_words() {
        let out = run(WordsArgs { amount: 250000.0 }).unwrap();
        assert_eq!(out, "Two lakh fifty thousand only");
    }

    #[test]
    fn test_negative_amount_fails() {
        let err = run(WordsArgs { amount: -3.0 }).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }
}
