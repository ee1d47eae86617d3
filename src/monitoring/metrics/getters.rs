//! Getter methods for retrieving and aggregating metrics

use super::collector::MetricsCollector;
use super::helpers::{calculate_average, nearest_rank_percentile, sorted_copy, summarize};
use super::types::MetricSummary;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

impl MetricsCollector {
    /// Snapshot of one series in chronological order (empty if unknown)
    pub fn get_metrics(&self, name: &str) -> Vec<f64> {
        self.storage
            .read()
            .series
            .get(name)
            .map(|series| series.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Snapshot of every series
    pub fn get_all_metrics(&self) -> HashMap<String, Vec<f64>> {
        self.storage
            .read()
            .series
            .iter()
            .map(|(name, series)| (name.clone(), series.iter().copied().collect()))
            .collect()
    }

    /// Names of all series, sorted
    pub fn metric_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.storage.read().series.keys().cloned().collect();
        names.sort();
        names
    }

    /// Arithmetic mean of a series (0 if empty or unknown)
    pub fn get_average_metric(&self, name: &str) -> f64 {
        self.storage
            .read()
            .series
            .get(name)
            .map(calculate_average)
            .unwrap_or(0.0)
    }

    /// Nearest-rank percentile of a series, `percentile` in `[0, 100]`.
    ///
    /// Sorts a copy of the series and returns the sample at rank
    /// `ceil(p/100 * n)`, clamped to the series bounds. Values are never
    /// interpolated, so this can differ from linear-interpolation percentiles
    /// on small series. Returns 0 for an empty or unknown series.
    pub fn get_percentile_metric(&self, name: &str, percentile: f64) -> f64 {
        let sorted = match self.storage.read().series.get(name) {
            Some(series) => sorted_copy(series),
            None => return 0.0,
        };
        nearest_rank_percentile(&sorted, percentile)
    }

    /// Summary of one series, if it exists
    pub fn get_metric_summary(&self, name: &str) -> Option<MetricSummary> {
        self.storage.read().series.get(name).map(summarize)
    }

    /// count/average/min/max/p50/p95/p99 for every series
    pub fn get_performance_summary(&self) -> BTreeMap<String, MetricSummary> {
        self.storage
            .read()
            .series
            .iter()
            .map(|(name, series)| (name.clone(), summarize(series)))
            .collect()
    }

    /// Summary as JSON with a generation timestamp
    pub fn export_summary_json(&self) -> serde_json::Value {
        serde_json::json!({
            "generated_at": Utc::now().to_rfc3339(),
            "environment": self.config.environment,
            "sampling_rate": self.sampling_rate(),
            "metrics": self.get_performance_summary(),
        })
    }

    /// Remove one series, or every series when `name` is `None`
    pub fn clear_metrics(&self, name: Option<&str>) {
        let mut storage = self.storage.write();
        match name {
            Some(name) => {
                storage.series.remove(name);
                debug!(metric = name, "Cleared metric series");
            }
            None => {
                storage.series.clear();
                debug!("Cleared all metric series");
            }
        }
    }
}
