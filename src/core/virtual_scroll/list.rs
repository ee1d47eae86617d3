//! Virtual list consumer: items plus scroll state, rendering only the window

use super::window::{VirtualWindow, compute_window};
use serde::{Deserialize, Serialize};

/// Layout configuration for a virtual list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualScrollConfig {
    /// Fixed height of each row
    pub item_height: f64,
    /// Height of the scroll viewport
    pub container_height: f64,
    /// Extra rows rendered above and below the viewport
    #[serde(default = "default_overscan")]
    pub overscan: usize,
}

impl Default for VirtualScrollConfig {
    fn default() -> Self {
        Self {
            item_height: 50.0,
            container_height: 400.0,
            overscan: default_overscan(),
        }
    }
}

impl VirtualScrollConfig {
    pub fn new(item_height: f64, container_height: f64, overscan: usize) -> Self {
        Self {
            item_height,
            container_height,
            overscan,
        }
    }

    /// Window for `item_count` rows at `scroll_top`
    pub fn window(&self, scroll_top: f64, item_count: usize) -> VirtualWindow {
        compute_window(
            scroll_top,
            self.item_height,
            self.container_height,
            item_count,
            self.overscan,
        )
    }
}

fn default_overscan() -> usize {
    5
}

/// Full item list with the currently rendered window.
///
/// The window is re-derived whenever the scroll offset, items or layout
/// change; it is never patched incrementally.
#[derive(Debug, Clone)]
pub struct VirtualList<T> {
    items: Vec<T>,
    config: VirtualScrollConfig,
    scroll_top: f64,
    window: VirtualWindow,
}

impl<T> VirtualList<T> {
    pub fn new(items: Vec<T>, config: VirtualScrollConfig) -> Self {
        let window = config.window(0.0, items.len());
        Self {
            items,
            config,
            scroll_top: 0.0,
            window,
        }
    }

    /// Apply a scroll event and return the new window
    pub fn set_scroll_top(&mut self, scroll_top: f64) -> VirtualWindow {
        self.scroll_top = if scroll_top.is_finite() {
            scroll_top.max(0.0)
        } else {
            0.0
        };
        self.recompute()
    }

    pub fn set_items(&mut self, items: Vec<T>) -> VirtualWindow {
        self.items = items;
        self.recompute()
    }

    pub fn set_config(&mut self, config: VirtualScrollConfig) -> VirtualWindow {
        self.config = config;
        self.recompute()
    }

    /// Rows to render, sliced from the full list
    pub fn visible_items(&self) -> &[T] {
        &self.items[self.window.range()]
    }

    pub fn window(&self) -> VirtualWindow {
        self.window
    }

    pub fn total_height(&self) -> f64 {
        self.window.total_height
    }

    pub fn offset_y(&self) -> f64 {
        self.window.offset_y
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn config(&self) -> &VirtualScrollConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Scroll offset that brings `index` to the top of the viewport,
    /// clamped to the scrollable range. Out-of-range indices target the
    /// last row.
    pub fn scroll_offset_for(&self, index: usize) -> f64 {
        let item_height = self.config.item_height;
        if self.items.is_empty() || !item_height.is_finite() || item_height <= 0.0 {
            return 0.0;
        }
        let index = index.min(self.items.len() - 1);
        let total = self.items.len() as f64 * self.config.item_height;
        let max_scroll = (total - self.config.container_height.max(0.0)).max(0.0);
        (index as f64 * self.config.item_height).min(max_scroll)
    }

    fn recompute(&mut self) -> VirtualWindow {
        self.window = self.config.window(self.scroll_top, self.items.len());
        self.window
    }
}
