//! # quote-cli: Quotation Generator Command Line
//!
//! Reads quotation JSON files and prints their figures, a text preview, or a
//! fresh draft. Every number comes from `quote-core`.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Command Run                                    │
//! │                                                                         │
//! │  1. Parse arguments (clap) ───────────────────────────────────────────► │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: WARN (DEBUG with --verbose), RUST_LOG overrides          │
//! │                                                                         │
//! │  3. Load Configuration ───────────────────────────────────────────────► │
//! │     • QUOTE_* environment variables                                     │
//! │                                                                         │
//! │  4. Execute Command ──────────────────────────────────────────────────► │
//! │     • Output to stdout, errors to stderr with an exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Price quotations with GST, freight and amounts in words.
#[derive(Debug, Parser)]
#[command(name = "quote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Loads configuration and runs the parsed command.
pub fn run(cli: Cli) -> CliResult<String> {
    let config = CliConfig::from_env()?;
    commands::execute(cli.command, &config)
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,quote_cli=debug,quote_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_words() {
        let cli = Cli::try_parse_from(["quote", "words", "1234.5"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Words(args) => assert_eq!(args.amount, 1234.5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_amount() {
        let cli = Cli::try_parse_from(["quote", "words", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Words(args) if args.amount == -5.0));
    }

    #[test]
    fn test_parse_totals_json() {
        let cli = Cli::try_parse_from(["quote", "-v", "totals", "q.json", "--json"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Totals(args) => {
                assert!(args.json);
                assert_eq!(args.file.to_str(), Some("q.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_new_date() {
        let cli = Cli::try_parse_from(["quote", "new", "--date", "2024-03-15"]).unwrap();
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.date.map(|d| d.to_string()).as_deref(), Some("2024-03-15"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_bad_date() {
        assert!(Cli::try_parse_from(["quote", "new", "--date", "15/03/2024"]).is_err());
    }
}
