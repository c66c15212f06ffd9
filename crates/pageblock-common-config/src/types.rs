//! Configuration types.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageblockConfig {
    /// Page and block sizes used when a caller gives none.
    pub pagination: PaginationDefaults,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default page and block sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationDefaults {
    /// Entries shown on one page.
    pub entries_per_page: i64,
    /// Pages grouped into one navigation block.
    pub pages_per_block: i64,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            entries_per_page: 10,
            pages_per_block: 10,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error).
    pub level: String,
    /// Output style.
    pub format: LogStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogStyle::Pretty,
        }
    }
}

/// Log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStyle {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// JSON lines.
    Json,
}
