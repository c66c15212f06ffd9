//! Span and timing helpers.

use tracing::{info_span, Span};

/// Create a span for one pagination request.
pub fn pagination_span(total_entries: i64, requested_page: i64) -> Span {
    info_span!(
        "paginate",
        total_entries,
        requested_page,
        error = tracing::field::Empty
    )
}

/// Create a span for a configuration load.
pub fn config_span(source: &str) -> Span {
    info_span!("config", source = %source)
}

/// Record an error on the current span.
pub fn record_error(error: &dyn std::error::Error) {
    Span::current().record("error", tracing::field::display(error));
}

/// Timing utility for operations.
pub struct Timer {
    start: std::time::Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    /// Complete the timer and record duration.
    pub fn finish(self) {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.operation,
            duration_us = %duration.as_micros(),
            "operation completed"
        );
    }
}

/// Macro for timing a block of code.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
