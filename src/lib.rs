//! # perfscope
//!
//! Client-side performance instrumentation for list-heavy interfaces.
//!
//! ## Features
//!
//! - **Metrics collection**: named series of timing samples held in bounded
//!   ring buffers, with sampling in production and nearest-rank percentiles
//! - **Observers and sinks**: synchronous observers are notified per sample;
//!   production samples are forwarded to analytics sinks without blocking
//! - **Virtual scrolling**: compute the rows a viewport must render
//! - **Rate limiting**: throttle and debounce for rapid input events
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use perfscope::{MetricsCollector, PerformanceConfig, VirtualScrollConfig, compute_window};
//!
//! let collector = MetricsCollector::new(PerformanceConfig::development());
//! let config = VirtualScrollConfig::default();
//!
//! let window = collector.measure("window_calc", || {
//!     compute_window(1000.0, config.item_height, config.container_height, 10_000, config.overscan)
//! });
//!
//! println!("render rows {:?}", window.range());
//! println!("p95 = {}ms", collector.get_percentile_metric("window_calc", 95.0));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod monitoring;
pub mod utils;

// Re-export main types
pub use config::{AnalyticsConfig, Environment, PerformanceConfig};
pub use utils::error::{PerfError, Result};

pub use core::rate_limiter::{DebounceState, DebouncedValue, Debouncer, Throttle, ThrottleState};
pub use core::virtual_scroll::{VirtualList, VirtualScrollConfig, VirtualWindow, compute_window};
pub use monitoring::{
    AnalyticsSink, MetricObserver, MetricSample, MetricSummary, MetricsCollector, RecordOutcome,
    Subscription, global, init_global,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information for the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
