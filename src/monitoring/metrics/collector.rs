//! Metrics collector implementation for recording metrics

use super::bounded::BoundedPush;
use super::observers::{MetricObserver, ObserverRegistry, Subscription};
use super::timer::MetricTimer;
use super::types::{MetricsStorage, RecordOutcome};
use crate::config::PerformanceConfig;
use crate::monitoring::sinks::{AnalyticsSink, MetricSample, PerformanceMarkSink, build_sinks};
use futures::future::join_all;
use parking_lot::RwLock;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Source of uniform draws in `[0, 1)` for the sampling gate
pub trait SampleSource: Send + Sync {
    fn draw(&self) -> f64;
}

impl<F> SampleSource for F
where
    F: Fn() -> f64 + Send + Sync,
{
    fn draw(&self) -> f64 {
        self()
    }
}

/// Default sample source backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl SampleSource for ThreadRngSource {
    fn draw(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Metrics collector recording named numeric samples.
///
/// Series and observers sit behind locks so the collector can be shared
/// across threads; every mutation of a series (append plus capacity trim)
/// happens under one write lock, so no reader or observer ever sees a series
/// above capacity.
pub struct MetricsCollector {
    /// Configuration
    pub(super) config: PerformanceConfig,
    /// All series consolidated into a single lock
    pub(super) storage: RwLock<MetricsStorage>,
    /// Subscribed observers, shared with outstanding subscriptions
    pub(super) observers: Arc<ObserverRegistry>,
    /// Analytics sinks (production only)
    pub(super) sinks: Vec<Arc<dyn AnalyticsSink>>,
    /// Mark sink kept separately so recorded marks can be queried
    pub(super) mark_sink: Option<Arc<PerformanceMarkSink>>,
    /// Sampling rate stored as f64 bits for lock-free access
    sampling_rate: AtomicU64,
    sample_source: Box<dyn SampleSource>,
}

impl MetricsCollector {
    /// Create a collector with sinks built from the analytics configuration.
    ///
    /// A zero series capacity is raised to one so a recorded sample is always
    /// visible to the observers notified about it.
    pub fn new(mut config: PerformanceConfig) -> Self {
        if config.max_samples_per_metric == 0 {
            warn!("max_samples_per_metric is 0; retaining one sample per metric");
            config.max_samples_per_metric = 1;
        }

        let (sinks, mark_sink) = if config.is_production() {
            build_sinks(&config.analytics)
        } else {
            (Vec::new(), None)
        };

        Self {
            sampling_rate: AtomicU64::new(config.effective_sampling_rate().to_bits()),
            config,
            storage: RwLock::new(MetricsStorage::default()),
            observers: Arc::new(ObserverRegistry::default()),
            sinks,
            mark_sink,
            sample_source: Box::new(ThreadRngSource),
        }
    }

    /// Replace the sampling draw source
    pub fn with_sample_source(mut self, source: impl SampleSource + 'static) -> Self {
        self.sample_source = Box::new(source);
        self
    }

    /// Add an extra analytics sink
    pub fn with_sink(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Replace all analytics sinks
    pub fn with_sinks(mut self, sinks: Vec<Arc<dyn AnalyticsSink>>) -> Self {
        self.sinks = sinks;
        self.mark_sink = None;
        self
    }

    pub fn config(&self) -> &PerformanceConfig {
        &self.config
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.max_samples_per_metric
    }

    #[inline]
    pub fn sampling_rate(&self) -> f64 {
        f64::from_bits(self.sampling_rate.load(Ordering::Relaxed))
    }

    /// Adjust the sampling rate at runtime; clamped to `[0, 1]`, NaN ignored
    pub fn set_sampling_rate(&self, rate: f64) {
        if rate.is_nan() {
            return;
        }
        let rate = rate.clamp(0.0, 1.0);
        self.sampling_rate.store(rate.to_bits(), Ordering::Relaxed);
    }

    /// Start timing work under `name`
    pub fn start_timer(&self, name: impl Into<String>) -> MetricTimer<'_> {
        MetricTimer::new(self, name.into())
    }

    /// Run a closure under a timer and return its result
    pub fn measure<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        let timer = self.start_timer(name);
        let result = f();
        timer.stop();
        result
    }

    /// Await a future under a timer and return its output
    pub async fn measure_async<F>(&self, name: &str, future: F) -> F::Output
    where
        F: Future,
    {
        let timer = self.start_timer(name);
        let output = future.await;
        timer.stop();
        output
    }

    /// Record one sample.
    ///
    /// Applies the sampling gate, appends to the bounded series, notifies
    /// observers synchronously in subscription order and, in production,
    /// forwards the sample to the analytics sinks without waiting for them.
    pub fn record_metric(&self, name: &str, value: f64) -> RecordOutcome {
        if !value.is_finite() {
            debug!(metric = name, "Discarding non-finite metric value {}", value);
            return RecordOutcome::Rejected;
        }

        if !self.passes_sampling_gate() {
            return RecordOutcome::Sampled;
        }

        {
            let capacity = self.capacity();
            let mut storage = self.storage.write();
            match storage.series.get_mut(name) {
                Some(series) => series.push_bounded(value, capacity),
                None => {
                    let mut series = std::collections::VecDeque::new();
                    series.push_bounded(value, capacity);
                    storage.series.insert(name.to_string(), series);
                }
            }
        }

        self.observers.notify(name, value);

        if self.config.is_production() {
            self.dispatch_to_sinks(name, value);
        }

        RecordOutcome::Recorded
    }

    /// Subscribe an observer; the returned handle unsubscribes it
    pub fn subscribe(&self, observer: impl MetricObserver + 'static) -> Subscription {
        self.subscribe_shared(Arc::new(observer))
    }

    /// Subscribe an already shared observer
    pub fn subscribe_shared(&self, observer: Arc<dyn MetricObserver>) -> Subscription {
        let id = self.observers.add(observer);
        debug!(observer_id = id, "Metric observer subscribed");
        Subscription::new(id, &self.observers)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Names of recorded performance marks, oldest first
    pub fn performance_marks(&self) -> Vec<String> {
        self.mark_sink
            .as_ref()
            .map(|sink| sink.marks())
            .unwrap_or_default()
    }

    fn passes_sampling_gate(&self) -> bool {
        let rate = self.sampling_rate();
        if rate >= 1.0 {
            return true;
        }
        if rate <= 0.0 {
            return false;
        }
        self.sample_source.draw() < rate
    }

    fn dispatch_to_sinks(&self, name: &str, value: f64) {
        if self.sinks.is_empty() {
            return;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                debug!(metric = name, "No async runtime available; skipping analytics sinks");
                return;
            }
        };

        let sample = MetricSample::new(name, value, self.config.analytics.page.clone());
        let sinks = self.sinks.clone();
        handle.spawn(async move {
            let sends = sinks.iter().map(|sink| sink.send(&sample));
            let results = join_all(sends).await;
            for (sink, result) in sinks.iter().zip(results) {
                if let Err(e) = result {
                    debug!(sink = sink.name(), metric = %sample.metric, "Analytics sink failed: {}", e);
                }
            }
        });
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new(PerformanceConfig::default())
    }
}

impl fmt::Debug for MetricsCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsCollector")
            .field("environment", &self.config.environment)
            .field("sampling_rate", &self.sampling_rate())
            .field("capacity", &self.capacity())
            .field("series", &self.storage.read().series.len())
            .field("observers", &self.observers)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
