//! Debounce: act only after input has been quiet for the full delay

use super::types::{Phase, TimerSlot};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::warn;

/// Debounce state machine, independent of any runtime.
///
/// Every call replaces the pending arguments and restarts the wait.
#[derive(Debug, Clone)]
pub struct DebounceState<A> {
    delay: Duration,
    phase: Phase<A>,
}

impl<A> DebounceState<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: Phase::Idle,
        }
    }

    /// Schedule `args` and return the new deadline
    pub fn call(&mut self, now: Instant, args: A) -> Instant {
        let deadline = now + self.delay;
        self.phase = Phase::Scheduled {
            deadline,
            pending: args,
        };
        deadline
    }

    /// Release the pending arguments once the quiet period has passed
    pub fn fire(&mut self, now: Instant) -> Option<A> {
        self.phase.take_due(now)
    }

    /// Release the pending arguments immediately
    pub fn flush(&mut self) -> Option<A> {
        self.phase.take()
    }

    pub fn cancel(&mut self) -> Option<A> {
        self.phase.take()
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_scheduled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.phase.deadline()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

struct Shared<A> {
    state: Mutex<DebounceState<A>>,
    timer: TimerSlot,
    callback: Box<dyn Fn(A) + Send + Sync>,
}

impl<A: Send + 'static> Shared<A> {
    fn fire_due(&self) {
        let due = self.state.lock().fire(Instant::now());
        if let Some(args) = due {
            (self.callback)(args);
        }
    }
}

/// Debounced callback driven by the tokio timer.
///
/// A zero delay runs the callback immediately. Dropping the debouncer
/// cancels the pending call.
pub struct Debouncer<A: Send + 'static> {
    shared: Arc<Shared<A>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(DebounceState::new(delay)),
                timer: TimerSlot::default(),
                callback: Box::new(callback),
            }),
        }
    }

    /// Timer changes happen under the state lock so the armed task always
    /// matches the latest deadline, even with concurrent callers.
    pub fn call(&self, args: A) {
        if self.delay().is_zero() {
            self.cancel();
            (self.shared.callback)(args);
            return;
        }

        let mut state = self.shared.state.lock();
        let deadline = state.call(Instant::now(), args);
        let shared = Arc::clone(&self.shared);
        if !self.shared.timer.arm(deadline, move || shared.fire_due()) {
            warn!("No async runtime available; dropping debounced call");
            state.cancel();
        }
    }

    /// Run the pending call now instead of waiting
    pub fn flush(&self) {
        let pending = {
            let mut state = self.shared.state.lock();
            self.shared.timer.abort();
            state.flush()
        };
        if let Some(args) = pending {
            (self.shared.callback)(args);
        }
    }

    /// Discard the pending call
    pub fn cancel(&self) {
        let mut state = self.shared.state.lock();
        self.shared.timer.abort();
        state.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().is_pending()
    }

    pub fn delay(&self) -> Duration {
        self.shared.state.lock().delay()
    }
}

impl<A: Send + 'static> Drop for Debouncer<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<A: Send + 'static> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay())
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Settled view of a rapidly changing value.
///
/// [`DebouncedValue::get`] returns the last input that survived a full
/// quiet period; intermediate inputs are never published.
pub struct DebouncedValue<T: Clone + Send + Sync + 'static> {
    settled: Arc<watch::Sender<T>>,
    debouncer: Debouncer<T>,
}

impl<T: Clone + Send + Sync + 'static> DebouncedValue<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        let (sender, _) = watch::channel(initial);
        let settled = Arc::new(sender);
        let publisher = Arc::clone(&settled);
        let debouncer = Debouncer::new(delay, move |value: T| {
            publisher.send_replace(value);
        });
        Self { settled, debouncer }
    }

    /// Feed a new input, restarting the quiet period
    pub fn set(&self, value: T) {
        self.debouncer.call(value);
    }

    /// Current settled value
    pub fn get(&self) -> T {
        self.settled.borrow().clone()
    }

    /// Receiver notified each time a value settles
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.settled.subscribe()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Publish the pending input now
    pub fn flush(&self) {
        self.debouncer.flush();
    }

    /// Drop the pending input; the settled value is unchanged
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }
}

impl<T: Clone + Send + Sync + fmt::Debug + 'static> fmt::Debug for DebouncedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedValue")
            .field("settled", &*self.settled.borrow())
            .field("debouncer", &self.debouncer)
            .finish()
    }
}
