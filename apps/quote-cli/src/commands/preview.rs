//! `quote preview <FILE>`

use std::path::PathBuf;

use clap::Args;
use quote_core::render::{render_text, Letterhead};
use quote_core::summary::QuotationSummary;
use quote_core::validation::validate_quotation;
use tracing::{info, warn};

use super::read_quotation;
use crate::error::CliResult;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Quotation JSON file
    pub file: PathBuf,
}

pub fn run(args: PreviewArgs) -> CliResult<String> {
    let quotation = read_quotation(&args.file)?;
    if let Err(e) = validate_quotation(&quotation) {
        warn!(error = %e, "Quotation is incomplete");
    }

    let summary = QuotationSummary::build(&quotation);
    for line in summary.lines_without_words() {
        warn!(item = %line.name, total = %line.total, "Line total has no words");
    }

    info!(
        ref_no = %quotation.ref_no,
        file_name = %quotation.export_file_name(),
        "Preview rendered"
    );
    Ok(render_text(&quotation, &summary, &Letterhead::default()))
}
