//! Throttle: at most one execution per interval, trailing call replaced

use super::types::{Phase, ThrottleDecision, TimerSlot};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

/// Throttle state machine, independent of any runtime.
///
/// A call runs immediately when `delay` has elapsed since the last
/// execution. Otherwise it becomes the single pending trailing call, due at
/// `last_run + delay`; a later call before then replaces its arguments.
#[derive(Debug, Clone)]
pub struct ThrottleState<A> {
    delay: Duration,
    last_run: Option<Instant>,
    phase: Phase<A>,
}

impl<A> ThrottleState<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_run: None,
            phase: Phase::Idle,
        }
    }

    pub fn call(&mut self, now: Instant, args: A) -> ThrottleDecision<A> {
        match self.last_run {
            Some(last) if now.saturating_duration_since(last) < self.delay => {
                let deadline = last + self.delay;
                let replaced = self.phase.is_scheduled();
                self.phase = Phase::Scheduled {
                    deadline,
                    pending: args,
                };
                ThrottleDecision::Deferred { deadline, replaced }
            }
            _ => {
                self.phase = Phase::Idle;
                self.last_run = Some(now);
                ThrottleDecision::RunNow(args)
            }
        }
    }

    /// Release the trailing call if it is due, recording the execution
    pub fn fire(&mut self, now: Instant) -> Option<A> {
        let args = self.phase.take_due(now)?;
        self.last_run = Some(now);
        Some(args)
    }

    /// Drop the trailing call without running it
    pub fn cancel(&mut self) -> Option<A> {
        self.phase.take()
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_scheduled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.phase.deadline()
    }

    pub fn last_run(&self) -> Option<Instant> {
        self.last_run
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

struct Shared<A> {
    state: Mutex<ThrottleState<A>>,
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

/// Throttled callback driven by the tokio timer.
///
/// Leading calls run synchronously on the caller; trailing calls run on a
/// spawned task. Dropping the throttle cancels any pending trailing call.
pub struct Throttle<A: Send + 'static> {
    shared: Arc<Shared<A>>,
}

impl<A: Send + 'static> Throttle<A> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ThrottleState::new(delay)),
                timer: TimerSlot::default(),
                callback: Box::new(callback),
            }),
        }
    }

    /// Timer changes happen under the state lock so the armed task always
    /// matches the scheduled phase, even with concurrent callers.
    pub fn call(&self, args: A) {
        let mut state = self.shared.state.lock();
        let decision = state.call(Instant::now(), args);

        match decision {
            ThrottleDecision::RunNow(args) => {
                self.shared.timer.abort();
                drop(state);
                (self.shared.callback)(args);
            }
            // the armed timer already targets this deadline
            ThrottleDecision::Deferred { replaced: true, .. } => {}
            ThrottleDecision::Deferred {
                deadline,
                replaced: false,
            } => {
                let shared = Arc::clone(&self.shared);
                if !self.shared.timer.arm(deadline, move || shared.fire_due()) {
                    warn!("No async runtime available; dropping trailing throttled call");
                    state.cancel();
                }
            }
        }
    }

    /// Cancel the pending trailing call, if any
    pub fn cancel(&self) {
        let mut state = self.shared.state.lock();
        self.shared.timer.abort();
        state.cancel();
    }

    pub fn has_pending(&self) -> bool {
        self.shared.state.lock().is_pending()
    }

    pub fn delay(&self) -> Duration {
        self.shared.state.lock().delay()
    }
}

impl<A: Send + 'static> Drop for Throttle<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<A: Send + 'static> fmt::Debug for Throttle<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("delay", &self.delay())
            .field("pending", &self.has_pending())
            .finish()
    }
}
