//! Process-wide collector tests
//!
//! The global collector can be initialised once per process, so every
//! assertion about it lives in a single test.

#[cfg(test)]
mod tests {
    use perfscope::{PerformanceConfig, global, init_global};

    #[test]
    fn test_global_collector_is_a_singleton() {
        let installed = init_global(PerformanceConfig::development().with_capacity(3));

        let first = global();
        let second = global();
        assert!(std::ptr::eq(first, second));
        assert!(!init_global(PerformanceConfig::development()));

        if installed {
            assert_eq!(first.capacity(), 3);
        }

        first.record_metric("global_check", 1.0);
        assert!(second.metric_names().contains(&"global_check".to_string()));
    }
}
