//! pageblock CLI
//!
//! Main entry point for the `pageblock` binary.

use std::process::ExitCode;

use clap::Parser;
use pageblock_common_config::Environment;
use pageblock_common_log::spans::config_span;
use tracing::debug;

use pageblock_cli::cli::Cli;
use pageblock_cli::error::{CliError, Exit};

fn main() -> ExitCode {
    match run() {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            eprintln!("error[{}]: {e}", e.code());
            e.exit_code()
        }
    }
}

fn run() -> Result<(), CliError> {
    // Before parsing: `.env` may set PAGEBLOCK_CONFIG
    Environment::init()?;
    let cli = Cli::parse();

    let config = cli.load_config()?;
    pageblock_common_log::init(cli.log_config(&config))?;

    config_span(&cli.config_source()).in_scope(|| debug!(?config, "configuration loaded"));

    cli.execute(config)
}
