//! Utility modules for perfscope
//!
//! - **error**: crate-wide error type and result alias
//! - **logging**: tracing subscriber initialisation

pub mod error;
pub mod logging;

pub use error::{PerfError, Result};
pub use logging::init_logging;

/// Format a duration in milliseconds as a human readable string
pub fn format_duration_ms(duration_ms: f64) -> String {
    if !duration_ms.is_finite() || duration_ms < 0.0 {
        return "n/a".to_string();
    }
    if duration_ms < 1.0 {
        format!("{:.0}µs", duration_ms * 1000.0)
    } else if duration_ms < 1000.0 {
        format!("{:.1}ms", duration_ms)
    } else if duration_ms < 60_000.0 {
        format!("{:.1}s", duration_ms / 1000.0)
    } else {
        format!("{:.1}m", duration_ms / 60_000.0)
    }
}
