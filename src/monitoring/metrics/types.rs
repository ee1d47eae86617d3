//! Types for metrics storage and aggregation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::VecDeque;

/// Metric series keyed by name; insertion order is chronological order
#[derive(Debug, Default)]
pub(super) struct MetricsStorage {
    pub(super) series: HashMap<String, VecDeque<f64>>,
}

/// Aggregate view of a single metric series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSummary {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

/// What `record_metric` did with a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Appended to its series and dispatched to observers
    Recorded,
    /// Discarded by the sampling gate
    Sampled,
    /// Discarded because the value was not finite
    Rejected,
}

impl RecordOutcome {
    #[inline]
    pub fn is_recorded(self) -> bool {
        matches!(self, Self::Recorded)
    }
}
