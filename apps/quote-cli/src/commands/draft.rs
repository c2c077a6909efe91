//! `quote new [--date YYYY-MM-DD]`
//!
//! Prints a blank quotation numbered after `QUOTE_LAST_REF_NO`, ready to be
//! filled in and passed to `totals` or `preview`.

use chrono::{Local, NaiveDate};
use clap::Args;
use quote_core::types::QuotationData;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Quotation date (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn run(args: NewArgs, config: &CliConfig) -> CliResult<String> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let draft = QuotationData::new_draft(&config.draft, date);

    info!(ref_no = %draft.ref_no, %date, "Draft created");
    Ok(serde_json::to_string_pretty(&draft)?)
}
