//! Observer registration and isolated dispatch

use crate::utils::error::Result;
use parking_lot::RwLock;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::warn;

/// In-process consumer of recorded samples.
///
/// Observers run synchronously inside `record_metric`, in subscription order.
/// A returned error or a panic is logged and contained; it never reaches the
/// caller of `record_metric` and never stops later observers from running.
pub trait MetricObserver: Send + Sync {
    fn on_metric(&self, name: &str, value: f64) -> Result<()>;
}

impl<F> MetricObserver for F
where
    F: Fn(&str, f64) -> Result<()> + Send + Sync,
{
    fn on_metric(&self, name: &str, value: f64) -> Result<()> {
        self(name, value)
    }
}

type ObserverEntry = (u64, Arc<dyn MetricObserver>);

/// Ordered set of subscribed observers
#[derive(Default)]
pub(super) struct ObserverRegistry {
    entries: RwLock<Vec<ObserverEntry>>,
    next_id: AtomicU64,
}

impl ObserverRegistry {
    pub(super) fn add(&self, observer: Arc<dyn MetricObserver>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.write().push((id, observer));
        id
    }

    pub(super) fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Notify every observer, isolating each call.
    ///
    /// Works on a snapshot so observers may subscribe, unsubscribe or query
    /// the collector from inside their callback.
    pub(super) fn notify(&self, name: &str, value: f64) {
        let snapshot: Vec<ObserverEntry> = self.entries.read().clone();

        for (id, observer) in snapshot {
            match catch_unwind(AssertUnwindSafe(|| observer.on_metric(name, value))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!(observer_id = id, metric = name, "Metric observer failed: {}", e);
                }
                Err(_) => {
                    warn!(observer_id = id, metric = name, "Metric observer panicked");
                }
            }
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

/// Disposer returned by `subscribe`.
///
/// Unsubscribing is explicit and idempotent. Dropping the handle leaves the
/// observer subscribed.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<ObserverRegistry>,
    active: AtomicBool,
}

impl Subscription {
    pub(super) fn new(id: u64, registry: &Arc<ObserverRegistry>) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
            active: AtomicBool::new(true),
        }
    }

    /// Remove the observer; repeated calls are no-ops
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}
