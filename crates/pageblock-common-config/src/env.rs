//! Environment variable handling.

use crate::types::PageblockConfig;
use std::env;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Configuration
    pub const PAGEBLOCK_CONFIG: &str = "PAGEBLOCK_CONFIG";
    pub const PAGEBLOCK_ENTRIES_PER_PAGE: &str = "PAGEBLOCK_ENTRIES_PER_PAGE";
    pub const PAGEBLOCK_PAGES_PER_BLOCK: &str = "PAGEBLOCK_PAGES_PER_BLOCK";

    // Logging
    pub const PAGEBLOCK_LOG_LEVEL: &str = "PAGEBLOCK_LOG_LEVEL";
    pub const PAGEBLOCK_LOG_FORMAT: &str = "PAGEBLOCK_LOG_FORMAT";
}

/// Environment configuration.
pub struct Environment {
    _guard: (),
}

impl Environment {
    /// Initialize environment from .env files in the working directory.
    pub fn init() -> Result<Self, EnvError> {
        Self::init_from(Path::new("."))
    }

    /// Initialize environment from `.env.local` and `.env` in `dir`.
    ///
    /// Variables that are already set are never overwritten, so `.env.local`
    /// takes precedence over `.env`. Missing files are skipped; unreadable or
    /// malformed ones are errors.
    pub fn init_from(dir: &Path) -> Result<Self, EnvError> {
        load_dotenv(&dir.join(".env.local"))?;
        load_dotenv(&dir.join(".env"))?;

        Ok(Self { _guard: () })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }

    /// Get an integer variable.
    pub fn get_int<T: std::str::FromStr>(var: &str) -> Result<Option<T>, EnvError> {
        match env::var(var) {
            Ok(v) => v.trim().parse().map(Some).map_err(|_| EnvError::InvalidValue {
                var: var.to_string(),
                message: format!("expected integer, got '{}'", v),
            }),
            Err(_) => Ok(None),
        }
    }
}

fn load_dotenv(path: &Path) -> Result<(), EnvError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Override configuration values from `PAGEBLOCK_*` variables.
pub fn apply_env_overrides(config: &mut PageblockConfig) -> Result<(), EnvError> {
    if let Some(per_page) = Environment::get_int(vars::PAGEBLOCK_ENTRIES_PER_PAGE)? {
        config.pagination.entries_per_page = per_page;
    }

    if let Some(per_block) = Environment::get_int(vars::PAGEBLOCK_PAGES_PER_BLOCK)? {
        config.pagination.pages_per_block = per_block;
    }

    if let Some(level) = Environment::get(vars::PAGEBLOCK_LOG_LEVEL) {
        config.logging.level = level;
    }

    if let Some(format) = Environment::get(vars::PAGEBLOCK_LOG_FORMAT) {
        config.logging.format = serde_yaml::from_str(&format.to_lowercase()).map_err(|_| {
            EnvError::InvalidValue {
                var: vars::PAGEBLOCK_LOG_FORMAT.to_string(),
                message: format!("expected pretty, compact or json, got '{}'", format),
            }
        })?;
    }

    Ok(())
}
