//! Scroll pipeline tests
//!
//! Scroll events are throttled into a virtual list whose window
//! computations are timed by a collector.

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use perfscope::{
        DebouncedValue, MetricsCollector, PerformanceConfig, Throttle, VirtualList,
        VirtualScrollConfig,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_throttled_scroll_updates_window() {
        let collector = Arc::new(MetricsCollector::new(PerformanceConfig::development()));
        let list = Arc::new(Mutex::new(VirtualList::new(
            (0..10_000).collect::<Vec<u32>>(),
            VirtualScrollConfig::new(50.0, 400.0, 5),
        )));

        let throttle = {
            let collector = Arc::clone(&collector);
            let list = Arc::clone(&list);
            Throttle::new(Duration::from_millis(16), move |scroll_top: f64| {
                collector.measure("window_calc", || list.lock().set_scroll_top(scroll_top));
            })
        };

        // 100 scroll events, 4ms apart
        for step in 1..=100 {
            throttle.call(step as f64 * 100.0);
            sleep(Duration::from_millis(4)).await;
        }
        sleep(Duration::from_millis(20)).await;

        let runs = collector.get_metrics("window_calc").len();
        assert!(runs >= 20 && runs <= 30, "unexpected run count {}", runs);

        // the final position always lands
        let list = list.lock();
        assert_eq!(list.scroll_top(), 10_000.0);
        assert_eq!(list.window().start_index, 195);
        assert_eq!(list.visible_items().first(), Some(&195));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_query() {
        let query = DebouncedValue::new(String::new(), Duration::from_millis(250));
        let mut settled = query.subscribe();

        for partial in ["v", "vi", "vir", "virt", "virtual"] {
            query.set(partial.to_string());
            sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(query.get(), "");

        settled.changed().await.unwrap();
        assert_eq!(query.get(), "virtual");
        assert!(!query.is_pending());
    }

    #[test]
    fn test_jump_to_row() {
        let mut list = VirtualList::new(
            (0..1_000).collect::<Vec<u32>>(),
            VirtualScrollConfig::new(40.0, 600.0, 2),
        );

        let offset = list.scroll_offset_for(500);
        let window = list.set_scroll_top(offset);
        assert!(window.contains(500));
        assert_eq!(list.visible_items()[500 - window.start_index], 500);

        let offset = list.scroll_offset_for(999);
        let window = list.set_scroll_top(offset);
        assert_eq!(window.end_index, 999);
    }
}
