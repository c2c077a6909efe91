//! `quote` binary entry point.

use std::process;

use clap::Parser;
use quote_cli::{init_tracing, run, Cli};
use tracing::error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}
