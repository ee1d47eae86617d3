//! Rate limiting primitives for rapid UI input
//!
//! Throttle and debounce are modelled as small state machines
//! (`Idle` / `Scheduled { deadline, pending }`) with tokio-driven wrappers
//! on top. A wrapper owns at most one pending call and one timer task.

mod debounce;
mod throttle;
mod types;


// Re-export public types
pub use debounce::{DebounceState, DebouncedValue, Debouncer};
pub use throttle::{Throttle, ThrottleState};
pub use types::{Phase, ThrottleDecision};
