//! Monitoring and observability system
//!
//! This module provides the in-process metrics collector and the analytics
//! sinks it forwards samples to.

pub mod metrics;
pub mod sinks;

pub use metrics::{
    MetricObserver, MetricSummary, MetricTimer, MetricsCollector, RecordOutcome, SampleSource,
    Subscription, global, init_global,
};
pub use sinks::{AnalyticsSink, EventLogSink, HttpBeaconSink, MetricSample, PerformanceMarkSink};
