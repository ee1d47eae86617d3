//! Helper functions for metrics calculations

use super::types::MetricSummary;
use std::collections::VecDeque;

/// Nearest-rank percentile over ascending-sorted values.
///
/// Returns the element at rank `ceil(p/100 * n)` (1-based), clamped to the
/// series bounds. No interpolation is performed, so results are always actual
/// samples; this differs from the linear-interpolation convention used by
/// most spreadsheet and numpy defaults. An empty slice yields `0.0`.
pub(super) fn nearest_rank_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return 0.0;
    }

    let rank = (percentile / 100.0 * n as f64).ceil();
    let index = if rank.is_nan() || rank < 1.0 {
        0
    } else {
        (rank as usize - 1).min(n - 1)
    };

    sorted_values[index]
}

/// Calculate average of f64 values
pub(super) fn calculate_average(values: &VecDeque<f64>) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Copy a series and sort the copy ascending
pub(super) fn sorted_copy(values: &VecDeque<f64>) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Build the full summary for one series
pub(super) fn summarize(values: &VecDeque<f64>) -> MetricSummary {
    if values.is_empty() {
        return MetricSummary::default();
    }

    let sorted = sorted_copy(values);
    MetricSummary {
        count: sorted.len(),
        average: calculate_average(values),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        p50: nearest_rank_percentile(&sorted, 50.0),
        p95: nearest_rank_percentile(&sorted, 95.0),
        p99: nearest_rank_percentile(&sorted, 99.0),
    }
}
