//! Virtual scrolling
//!
//! Renders only the rows that can be on screen (plus an overscan margin) of
//! a fixed-row-height list.

mod list;
mod window;


pub use list::{VirtualList, VirtualScrollConfig};
pub use window::{VirtualWindow, compute_window};
