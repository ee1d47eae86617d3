//! Bounded collection utilities for metrics

use std::collections::VecDeque;

/// Maximum number of performance marks retained by the mark sink
pub(crate) const MAX_PERFORMANCE_MARKS: usize = 1_000;

/// Helper trait for bounded VecDeque operations
pub(crate) trait BoundedPush<T> {
    fn push_bounded(&mut self, value: T, max_size: usize);

    fn trim_to(&mut self, max_size: usize);
}

impl<T> BoundedPush<T> for VecDeque<T> {
    /// Append a value, then evict the oldest excess entries in one drain
    #[inline]
    fn push_bounded(&mut self, value: T, max_size: usize) {
        self.push_back(value);
        self.trim_to(max_size);
    }

    #[inline]
    fn trim_to(&mut self, max_size: usize) {
        if self.len() > max_size {
            let excess = self.len() - max_size;
            self.drain(..excess);
        }
    }
}
