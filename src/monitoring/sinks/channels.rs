//! Analytics sink implementations

use super::types::{AnalyticsEvent, BeaconPayload, MetricSample};
use crate::config::AnalyticsConfig;
use crate::monitoring::metrics::bounded::{BoundedPush, MAX_PERFORMANCE_MARKS};
use crate::utils::error::{PerfError, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{info, warn};

/// Analytics sink trait
#[async_trait::async_trait]
pub trait AnalyticsSink: Send + Sync + std::fmt::Debug {
    /// Deliver one sample
    async fn send(&self, sample: &MetricSample) -> Result<()>;

    /// Get sink name
    fn name(&self) -> &str;
}

/// Emits a structured `performance_metric` analytics event through `tracing`
#[derive(Debug, Default)]
pub struct EventLogSink;

impl EventLogSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl AnalyticsSink for EventLogSink {
    async fn send(&self, sample: &MetricSample) -> Result<()> {
        let event = AnalyticsEvent::from(sample);
        info!(
            target: "perfscope::analytics",
            event = "performance_metric",
            metric_name = %event.metric_name,
            value = event.value,
            timestamp = event.timestamp,
            page = event.page.as_deref().unwrap_or(""),
            "performance_metric"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "event_log"
    }
}

/// POSTs each sample as JSON to a configured endpoint
#[derive(Debug)]
pub struct HttpBeaconSink {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl HttpBeaconSink {
    /// Create a new HTTP beacon sink
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl AnalyticsSink for HttpBeaconSink {
    async fn send(&self, sample: &MetricSample) -> Result<()> {
        let payload = BeaconPayload::from_sample(sample, &self.user_agent);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PerfError::sink(format!("Failed to send analytics beacon: {}", e)))?;

        if !response.status().is_success() {
            return Err(PerfError::sink(format!(
                "Analytics endpoint returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "http_beacon"
    }
}

/// Records a uniquely named performance mark per sample
#[derive(Debug)]
pub struct PerformanceMarkSink {
    marks: Mutex<VecDeque<String>>,
    sequence: AtomicU64,
    capacity: usize,
}

impl Default for PerformanceMarkSink {
    fn default() -> Self {
        Self::new(MAX_PERFORMANCE_MARKS)
    }
}

impl PerformanceMarkSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            marks: Mutex::new(VecDeque::new()),
            sequence: AtomicU64::new(0),
            capacity: capacity.max(1),
        }
    }

    /// Mark `"{metric}-{millis}-{seq}"`; the sequence keeps names unique
    /// when several samples share a millisecond
    pub fn mark(&self, sample: &MetricSample) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let name = format!(
            "{}-{}-{}",
            sample.metric,
            sample.timestamp.timestamp_millis(),
            seq
        );
        self.marks.lock().push_bounded(name.clone(), self.capacity);
        name
    }

    /// Recorded mark names, oldest first
    pub fn marks(&self) -> Vec<String> {
        self.marks.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.marks.lock().clear();
    }
}

#[async_trait::async_trait]
impl AnalyticsSink for PerformanceMarkSink {
    async fn send(&self, sample: &MetricSample) -> Result<()> {
        self.mark(sample);
        Ok(())
    }

    fn name(&self) -> &str {
        "performance_mark"
    }
}

/// Build the sinks enabled by configuration.
///
/// Also returns the mark sink separately so its marks stay queryable. A
/// beacon sink that cannot be constructed is skipped with a warning.
pub fn build_sinks(
    config: &AnalyticsConfig,
) -> (Vec<Arc<dyn AnalyticsSink>>, Option<Arc<PerformanceMarkSink>>) {
    let mut sinks: Vec<Arc<dyn AnalyticsSink>> = Vec::new();
    let mut mark_sink = None;

    if config.event_log {
        sinks.push(Arc::new(EventLogSink::new()));
    }

    if let Some(endpoint) = &config.endpoint {
        match HttpBeaconSink::new(
            endpoint.clone(),
            config.user_agent.clone(),
            Duration::from_millis(config.request_timeout_ms),
        ) {
            Ok(sink) => sinks.push(Arc::new(sink)),
            Err(e) => warn!("Analytics beacon disabled: {}", e),
        }
    }

    if config.performance_marks {
        let sink = Arc::new(PerformanceMarkSink::default());
        sinks.push(sink.clone());
        mark_sink = Some(sink);
    }

    (sinks, mark_sink)
}
