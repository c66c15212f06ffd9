//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use pageblock_common_config::{
    apply_env_overrides, validate, ConfigLoader, LogStyle, PageblockConfig,
};
use pageblock_common_log::{LogConfig, LogFormat, LogLevel};

use crate::commands::{ComputeCommand, ConfigCommand};
use crate::error::CliError;

/// pageblock - pagination arithmetic
///
/// Compute page counts, page blocks and record slices for a paginated listing.
#[derive(Debug, Parser)]
#[command(
    name = "pageblock",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error logging"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "PAGEBLOCK_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute pagination metadata for one page of a listing
    Compute(ComputeCommand),

    /// Show the effective configuration
    Config(ConfigCommand),
}

impl Cli {
    /// Load configuration from the given file or `.pageblock/config.yaml`,
    /// then apply `PAGEBLOCK_*` overrides.
    ///
    /// `.env` files must already be loaded so they can supply overrides.
    pub fn load_config(&self) -> Result<PageblockConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_file(path)?,
            None => ConfigLoader::default().load()?,
        };

        apply_env_overrides(&mut config)?;
        validate(&config)?;

        Ok(config)
    }

    /// Where the configuration came from, for diagnostics.
    pub fn config_source(&self) -> String {
        self.config
            .as_ref()
            .map_or_else(|| "project".to_string(), |p| p.display().to_string())
    }

    /// Logging configuration from the config file and verbosity flags.
    ///
    /// Source locations and span events still follow `PAGEBLOCK_LOG_SOURCE`
    /// and `PAGEBLOCK_LOG_SPANS`.
    pub fn log_config(&self, config: &PageblockConfig) -> LogConfig {
        let level = match self.verbose {
            0 if self.quiet => LogLevel::Error,
            0 => LogLevel::parse(&config.logging.level).unwrap_or_default(),
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };

        let format = match config.logging.format {
            LogStyle::Pretty => LogFormat::Pretty,
            LogStyle::Compact => LogFormat::Compact,
            LogStyle::Json => LogFormat::Json,
        };

        LogConfig::from_env().with_level(level).with_format(format)
    }

    /// Execute the selected command
    pub fn execute(self, config: PageblockConfig) -> Result<(), CliError> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Command::Compute(cmd) => cmd.execute(&ctx),
            Command::Config(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub config: PageblockConfig,
    pub format: OutputFormat,
}
