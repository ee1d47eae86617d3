//! Custom test assertions
//!
//! Provides domain-specific assertions for perfscope summaries.

use perfscope::MetricSummary;

/// Assertions for MetricSummary
pub trait SummaryAssertions {
    /// Assert `min <= p50 <= p95 <= p99 <= max` and the average lies in range
    fn assert_ordered(&self);

    /// Assert the summary covers exactly `count` samples
    fn assert_count(&self, count: usize);
}

impl SummaryAssertions for MetricSummary {
    fn assert_ordered(&self) {
        assert!(
            self.min <= self.p50 && self.p50 <= self.p95 && self.p95 <= self.p99 && self.p99 <= self.max,
            "Expected ordered percentiles, got {:?}",
            self
        );
        assert!(
            self.min <= self.average && self.average <= self.max,
            "Expected average within [min, max], got {:?}",
            self
        );
    }

    fn assert_count(&self, count: usize) {
        assert_eq!(self.count, count, "Unexpected sample count in {:?}", self);
    }
}
