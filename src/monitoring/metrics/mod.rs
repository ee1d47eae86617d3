//! Metrics collection and aggregation
//!
//! Named numeric samples are kept in bounded series (oldest evicted first),
//! gated by a sampling rate, and fanned out to in-process observers and, in
//! production, to analytics sinks.

pub(crate) mod bounded;
mod collector;
mod getters;
mod global;
mod helpers;
mod observers;
mod timer;
mod types;


pub use collector::{MetricsCollector, SampleSource, ThreadRngSource};
pub use global::{global, init_global};
pub use observers::{MetricObserver, Subscription};
pub use timer::MetricTimer;
pub use types::{MetricSummary, RecordOutcome};
