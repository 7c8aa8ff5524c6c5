//! # gx2
//!
//! Command-line front end for the Gx2 Invest contact form and income
//! calculator logic.
//!
//! ## Usage
//! ```bash
//! gx2 inn 7707083893
//! gx2 phone "8 912 243 44 35"
//! gx2 income "1 000 000" --json
//! gx2 contact --name Анна --inn 7707083893 --phone 79122434435 --email a@b.c
//! ```
//!
//! Results go to stdout, logs to stderr. A failed check exits with status 1.

mod cli;
mod commands;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            debug!(error = %err, "command failed");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    // Load configuration
    let config = CliConfig::load()?;

    // Initialize tracing (RUST_LOG wins over GX2_LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    debug!(?output, log_level = %config.log_level, "configuration loaded");

    let report = commands::run(&cli.command)?;
    println!("{}", report.render(output)?);

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
