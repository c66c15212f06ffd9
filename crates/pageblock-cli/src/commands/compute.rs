//! Compute command implementation.

use clap::Parser;
use pageblock_common_log::{
    spans::{pagination_span, record_error},
    timed,
};
use pageblock_core::compute;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_output;

/// Compute pagination metadata for one page of a listing
#[derive(Debug, Parser)]
pub struct ComputeCommand {
    /// Total number of entries in the listing
    #[arg(short, long, allow_negative_numbers = true)]
    pub total: i64,

    /// Entries per page [default: pagination.entries_per_page]
    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,

    /// Pages per navigation block [default: pagination.pages_per_block]
    #[arg(long, allow_negative_numbers = true)]
    pub per_block: Option<i64>,

    /// Requested page; out-of-range values are clamped
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,
}

impl ComputeCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let per_page = self
            .per_page
            .unwrap_or(ctx.config.pagination.entries_per_page);
        let per_block = self
            .per_block
            .unwrap_or(ctx.config.pagination.pages_per_block);

        let span = pagination_span(self.total, self.page);
        let _guard = span.enter();

        let result = timed!("compute", compute(self.total, per_page, per_block, self.page))
            .map_err(|e| {
                record_error(&e);
                e
            })?;
        print_output(ctx, &result)
    }
}
