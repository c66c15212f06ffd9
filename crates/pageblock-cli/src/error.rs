//! CLI error handling and exit codes.

use std::io;
use std::process::ExitCode;

use pageblock_common_config::{ConfigError, EnvError};
use pageblock_common_log::LogError;
use pageblock_core::PaginationError;
use thiserror::Error;

/// Application exit codes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("environment error: {0}")]
    Env(#[from] EnvError),

    #[error("logging error: {0}")]
    Log(#[from] LogError),

    #[error("invalid pagination input: {0}")]
    Pagination(#[from] PaginationError),

    #[error("failed to format output: {message}")]
    Format { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E001",
            Self::Env(_) => "E002",
            Self::Log(_) => "E003",
            Self::Pagination(_) => "E004",
            Self::Format { .. } => "E005",
            Self::Io(_) => "E006",
        }
    }

    /// Exit status category for this error
    pub fn exit(&self) -> Exit {
        match self {
            Self::Config(_) | Self::Env(_) | Self::Log(_) => Exit::ConfigError,
            Self::Pagination(_) => Exit::ValidationError,
            Self::Io(_) => Exit::IoError,
            Self::Format { .. } => Exit::GeneralError,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        self.exit().into()
    }

    /// Create a formatting error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}
