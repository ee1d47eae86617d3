//! Rate limiter types and data structures

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Deferral state shared by throttle and debounce.
///
/// At most one call is ever pending; scheduling again replaces its
/// arguments instead of queueing another call.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<A> {
    Idle,
    Scheduled { deadline: Instant, pending: A },
}

impl<A> Default for Phase<A> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<A> Phase<A> {
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Self::Idle => None,
            Self::Scheduled { deadline, .. } => Some(*deadline),
        }
    }

    /// Take the pending arguments if the deadline has been reached
    pub(super) fn take_due(&mut self, now: Instant) -> Option<A> {
        let due = matches!(self, Self::Scheduled { deadline, .. } if now >= *deadline);
        if due { self.take() } else { None }
    }

    /// Drop back to idle, returning any pending arguments
    pub(super) fn take(&mut self) -> Option<A> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Scheduled { pending, .. } => Some(pending),
        }
    }
}

/// Outcome of feeding a call into the throttle state machine
#[derive(Debug, Clone, PartialEq)]
pub enum ThrottleDecision<A> {
    /// The interval has elapsed; run now with these arguments
    RunNow(A),
    /// Deferred to `deadline`. `replaced` is true when an earlier pending
    /// call's arguments were discarded.
    Deferred { deadline: Instant, replaced: bool },
}

/// Holder for the single deferred task owned by a rate-limited wrapper
#[derive(Debug, Default)]
pub(super) struct TimerSlot {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TimerSlot {
    /// Run `on_due` at `deadline`, replacing (and aborting) any armed task.
    ///
    /// Returns `false` when no tokio runtime is available to drive the timer.
    pub(super) fn arm<F>(&self, deadline: Instant, on_due: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            return false;
        };

        let task = handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_due();
        });

        if let Some(previous) = self.task.lock().replace(task) {
            previous.abort();
        }
        true
    }

    pub(super) fn abort(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}
