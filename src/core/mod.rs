//! Core rendering-side primitives
//!
//! Windowing for long lists and rate limiting for the input events that
//! drive it.

pub mod rate_limiter; // Throttle and debounce
pub mod virtual_scroll; // Visible-window calculation

// Re-export commonly used types
pub use rate_limiter::{Debouncer, DebouncedValue, Throttle};
pub use virtual_scroll::{VirtualList, VirtualScrollConfig, VirtualWindow, compute_window};
