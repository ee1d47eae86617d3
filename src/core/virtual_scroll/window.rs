//! Visible-window arithmetic for fixed-height virtual lists

use serde::Serialize;
use std::ops::Range;

/// Rows of a virtual list that should be rendered for one scroll position.
///
/// `start_index..=end_index` is the rendered range including overscan. When
/// the list is empty there is no range and [`VirtualWindow::is_empty`] is
/// true; the index fields are then zero and must not be used.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VirtualWindow {
    pub start_index: usize,
    pub end_index: usize,
    /// Height of the full-list spacer
    pub total_height: f64,
    /// Translation applied to the rendered slice
    pub offset_y: f64,
    len: usize,
}

impl VirtualWindow {
    /// Window over an empty list
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
        total_height: 0.0,
        offset_y: 0.0,
        len: 0,
    };

    /// Number of rendered rows
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rendered rows as a half-open range, suitable for slicing
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.len
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Compute the rendered window for a fixed-row-height list.
///
/// - `start = max(0, floor(scroll_top / item_height) - overscan)`
/// - `end = min(item_count - 1, ceil((scroll_top + container_height) / item_height) + overscan)`
/// - `total_height = item_count * item_height`
/// - `offset_y = start * item_height`
///
/// Negative or non-finite scroll offsets and container heights are treated as
/// zero. A non-positive item height or an empty list yields
/// [`VirtualWindow::EMPTY`]. A scroll offset past the end of the list pins
/// the window to the last row.
pub fn compute_window(
    scroll_top: f64,
    item_height: f64,
    container_height: f64,
    item_count: usize,
    overscan: usize,
) -> VirtualWindow {
    if item_count == 0 || !item_height.is_finite() || item_height <= 0.0 {
        return VirtualWindow::EMPTY;
    }

    let scroll_top = non_negative(scroll_top);
    let container_height = non_negative(container_height);
    let last_index = item_count - 1;

    // f64 -> usize casts saturate, so huge offsets cannot wrap
    let first_visible = (scroll_top / item_height).floor() as usize;
    let last_visible = ((scroll_top + container_height) / item_height).ceil() as usize;

    let end_index = last_visible.saturating_add(overscan).min(last_index);
    let start_index = first_visible.saturating_sub(overscan).min(end_index);

    VirtualWindow {
        start_index,
        end_index,
        total_height: item_count as f64 * item_height,
        offset_y: start_index as f64 * item_height,
        len: end_index - start_index + 1,
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
