//! `quote totals <FILE> [--json]`

use std::path::PathBuf;

use clap::Args;
use quote_core::summary::QuotationSummary;
use quote_core::validation::validate_quotation;
use tracing::{info, warn};

use super::read_quotation;
use crate::error::CliResult;

#[derive(Debug, Args)]
pub struct TotalsArgs {
    /// Quotation JSON file
    pub file: PathBuf,

    /// Print the full summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TotalsArgs) -> CliResult<String> {
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
        grand_total = summary.totals.rounded_grand_total,
        "Totals computed"
    );

    if args.json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(format_summary(&summary))
    }
}

/// Line totals, the totals block and the grand total in words.
pub fn format_summary(summary: &QuotationSummary) -> String {
    let mut out = Vec::new();

    for (index, line) in summary.lines.iter().enumerate() {
        out.push(format!(
            "{:>3}. {:<34}{:>8} {:>18}",
            index + 1,
            line.name,
            line.quantity,
            line.total
        ));
    }
    if !summary.lines.is_empty() {
        out.push(String::new());
    }

    for row in &summary.totals_rows {
        out.push(format!("{:<46}{:>18}", row.label, row.amount));
    }
    out.push(format!("{:<46}{:>18}", "Grand Total", summary.grand_total));
    if !summary.grand_total_in_words.is_empty() {
        out.push(summary.grand_total_in_words.clone());
    }

    out.join("\n")
}
