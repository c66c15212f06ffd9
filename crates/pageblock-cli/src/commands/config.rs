//! Config command implementation.

use clap::Parser;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_output;

/// Show the effective configuration after file and environment overrides
#[derive(Debug, Parser)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        print_output(ctx, &ctx.config)
    }
}
