//! Error types for pagination.

use thiserror::Error;

/// Errors that can occur while computing pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A count used as a divisor was zero or negative.
    #[error("{name} must be at least 1 (got {value})")]
    InvalidDivisor {
        /// Name of the offending input.
        name: &'static str,
        /// Value supplied by the caller.
        value: i64,
    },

    /// The total entry count was zero or negative.
    #[error("total_entries must be at least 1 (got {total_entries})")]
    NonPositiveTotal {
        /// Value supplied by the caller.
        total_entries: i64,
    },
}

impl PaginationError {
    /// Reject a divisor below 1.
    pub(crate) fn check_divisor(name: &'static str, value: i64) -> Result<i64> {
        if value < 1 {
            return Err(Self::InvalidDivisor { name, value });
        }
        Ok(value)
    }
}

/// Result type alias for pagination operations.
pub type Result<T> = std::result::Result<T, PaginationError>;
