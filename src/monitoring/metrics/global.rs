//! Process-wide collector instance
//!
//! Initialised on first use and never torn down.

use super::collector::MetricsCollector;
use crate::config::PerformanceConfig;
use once_cell::sync::OnceCell;
use tracing::warn;

static GLOBAL_COLLECTOR: OnceCell<MetricsCollector> = OnceCell::new();

/// Get the global collector, building it from the environment on first access.
///
/// An invalid environment falls back to default configuration.
pub fn global() -> &'static MetricsCollector {
    GLOBAL_COLLECTOR.get_or_init(|| {
        let config = PerformanceConfig::from_env().unwrap_or_else(|e| {
            warn!("Invalid performance configuration, using defaults: {}", e);
            PerformanceConfig::default()
        });
        MetricsCollector::new(config)
    })
}

/// Install an explicitly configured global collector.
///
/// Returns `false` if the global collector was already initialised.
pub fn init_global(config: PerformanceConfig) -> bool {
    GLOBAL_COLLECTOR.set(MetricsCollector::new(config)).is_ok()
}
