//! # Commands
//!
//! One module per subcommand. Every command returns the text to print, so
//! `main` owns stdout and the commands stay testable.
//!
//! ```text
//! quote words 1234.50          → amount in words
//! quote totals q.json [--json] → figures for a saved quotation
//! quote preview q.json         → printable text rendition
//! quote new [--date D]         → fresh draft JSON
//! ```

pub mod draft;
pub mod preview;
pub mod totals;
pub mod words;

use std::fs;
use std::path::Path;

use clap::Subcommand;
use quote_core::QuotationData;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

pub use draft::NewArgs;
pub use preview::PreviewArgs;
pub use totals::TotalsArgs;
pub use words::WordsArgs;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write an amount in words (Indian numbering)
    Words(WordsArgs),

    /// Show the totals of a quotation JSON file
    Totals(TotalsArgs),

    /// Print a quotation as plain text
    Preview(PreviewArgs),

    /// Print a new draft quotation as JSON
    New(NewArgs),
}

/// Runs a command and returns its output.
pub fn execute(command: Commands, config: &CliConfig) -> CliResult<String> {
    match command {
        Commands::Words(args) => words::run(args),
        Commands::Totals(args) => totals::run(args),
        Commands::Preview(args) => preview::run(args),
        Commands::New(args) => draft::run(args, config),
    }
}

/// Reads and decodes a quotation file.
pub(crate) fn read_quotation(path: &Path) -> CliResult<QuotationData> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let quotation = QuotationData::from_json(&json)?;

    debug!(
        path = %path.display(),
        ref_no = %quotation.ref_no,
        items = quotation.products.len(),
        "Quotation loaded"
    );
    Ok(quotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let err = read_quotation(Path::new("/nonexistent/quotation.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
