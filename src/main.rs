//! Sieve Report CLI
//!
//! Generates `summary_report.md` and `results_chart.png` from `all_results.csv`.

use clap::Parser;
use sieve_report::cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging on stderr, stdout carries the report messages
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Report generation failed: {:?}", e);
            println!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
