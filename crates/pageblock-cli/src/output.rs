//! Output formatting utilities for CLI commands.

use std::io::Write;

use pageblock_common_config::PageblockConfig;
use pageblock_core::PaginationResult;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput {
    fn format_text(&self) -> Result<String, CliError>;
    fn format_json(&self) -> Result<String, CliError>;
}

/// Print formatted output to stdout
pub fn print_output<T>(ctx: &CommandContext, value: &T) -> Result<(), CliError>
where
    T: FormattedOutput,
{
    write_output(ctx.format, value, std::io::stdout().lock())
}

/// Print formatted output to a writer
pub fn write_output<T, W>(format: OutputFormat, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput,
    W: Write,
{
    let output = match format {
        OutputFormat::Text => value.format_text()?,
        OutputFormat::Json => value.format_json()?,
    };

    writeln!(writer, "{}", output)?;
    Ok(())
}

fn optional(page: Option<i64>) -> String {
    page.map_or_else(|| "-".to_string(), |p| p.to_string())
}

impl FormattedOutput for PaginationResult {
    fn format_text(&self) -> Result<String, CliError> {
        let lines = [
            ("total_entries", self.total_entries().to_string()),
            ("entries_per_page", self.entries_per_page().to_string()),
            ("pages_per_block", self.pages_per_block().to_string()),
            ("total_pages", self.total_pages().to_string()),
            ("current_page", self.current_page().to_string()),
            ("prev_page", optional(self.prev_page())),
            ("next_page", optional(self.next_page())),
            ("start_of_block", self.start_of_block().to_string()),
            ("end_of_block", self.end_of_block().to_string()),
            ("prev_block_page", optional(self.prev_block_page())),
            ("next_block_page", optional(self.next_block_page())),
            ("start_of_slice", self.start_of_slice().to_string()),
            ("end_of_slice", self.end_of_slice().to_string()),
            ("length_of_slice", self.length_of_slice().to_string()),
        ];

        Ok(lines
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_json(&self) -> Result<String, CliError> {
        serde_json::to_string_pretty(self).map_err(|e| CliError::format(e.to_string()))
    }
}

impl FormattedOutput for PageblockConfig {
    fn format_text(&self) -> Result<String, CliError> {
        serde_yaml::to_string(self)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| CliError::format(e.to_string()))
    }

    fn format_json(&self) -> Result<String, CliError> {
        serde_json::to_string_pretty(self).map_err(|e| CliError::format(e.to_string()))
    }
}
