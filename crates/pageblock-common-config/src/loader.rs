//! Configuration file loading and parsing.

use crate::types::PageblockConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the configuration file.
pub const CONFIG_DIR: &str = ".pageblock";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.yaml";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "warning", "error"];

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the project configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.pageblock/config.yaml`, falling back to
    /// defaults when the file does not exist.
    pub fn load(&self) -> Result<PageblockConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            return Ok(PageblockConfig::default());
        }

        Self::load_file(&config_path)
    }

    /// Load configuration from an explicit file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<PageblockConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate YAML configuration text.
    pub fn parse(contents: &str) -> Result<PageblockConfig, ConfigError> {
        let expanded = expand_env_vars(contents)?;

        // An empty or comment-only file means "all defaults".
        if expanded.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(PageblockConfig::default());
        }

        let config: PageblockConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        validate(&config)?;
        Ok(config)
    }

    /// Save configuration to `.pageblock/config.yaml`.
    pub fn save(&self, config: &PageblockConfig) -> Result<(), ConfigError> {
        let config_dir = self.base_path.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir)?;

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(config_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| {
        ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        }
    })?;

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let var_name = &cap[1];
        let default = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match default {
                Some(d) => d.to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result = result.replace(full_match.as_str(), &value);
    }

    Ok(result)
}

/// Validate configuration values.
pub fn validate(config: &PageblockConfig) -> Result<(), ConfigError> {
    if config.pagination.entries_per_page < 1 {
        return Err(ConfigError::ValidationError {
            message: "pagination.entries_per_page must be at least 1".to_string(),
        });
    }

    if config.pagination.pages_per_block < 1 {
        return Err(ConfigError::ValidationError {
            message: "pagination.pages_per_block must be at least 1".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError {
            message: format!("logging.level '{}' is not a known level", config.logging.level),
        });
    }

    Ok(())
}
