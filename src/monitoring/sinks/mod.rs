//! Analytics sinks
//!
//! Best-effort, order-independent destinations for production samples.
//! Dispatch is fire-and-forget: failures are logged at debug level and
//! dropped, and nothing is retried.

mod channels;
mod types;


pub use channels::{AnalyticsSink, EventLogSink, HttpBeaconSink, PerformanceMarkSink, build_sinks};
pub use types::{AnalyticsEvent, BeaconPayload, MetricSample};
