//! Timer handle returned by `MetricsCollector::start_timer`

use super::collector::MetricsCollector;
use std::time::{Duration, Instant};

/// Measures elapsed time for a named metric.
///
/// Every call to [`MetricTimer::stop`] records the elapsed time since the
/// timer started. Callers are expected to stop once; nothing records on drop.
#[derive(Debug)]
#[must_use = "a timer records nothing until `stop` is called"]
pub struct MetricTimer<'a> {
    collector: &'a MetricsCollector,
    name: String,
    start: Instant,
}

impl<'a> MetricTimer<'a> {
    pub(super) fn new(collector: &'a MetricsCollector, name: String) -> Self {
        Self {
            collector,
            name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration in milliseconds and return it
    pub fn stop(&self) -> f64 {
        let duration_ms = self.elapsed().as_secs_f64() * 1000.0;
        self.collector.record_metric(&self.name, duration_ms);
        duration_ms
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
