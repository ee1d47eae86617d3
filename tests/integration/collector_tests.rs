//! Collector integration tests
//!
//! Covers sampling, bounded retention, observers and sink fan-out through
//! the public API only.

#[cfg(test)]
mod tests {
    use crate::common::{CollectorFactory, RecordingObserver, RecordingSink, SummaryAssertions};
    use perfscope::RecordOutcome;
    use std::sync::Arc;
    use std::time::Duration;

    // ==================== Retention ====================

    #[test]
    fn test_series_never_exceeds_capacity() {
        let collector = CollectorFactory::development(50);
        for i in 0..10_000 {
            collector.record_metric("frame", i as f64);
        }

        let series = collector.get_metrics("frame");
        assert_eq!(series.len(), 50);
        assert_eq!(series.first(), Some(&9_950.0));
        assert_eq!(series.last(), Some(&9_999.0));

        let summary = collector.get_metric_summary("frame").unwrap();
        summary.assert_count(50);
        summary.assert_ordered();
    }

    #[test]
    fn test_series_are_independent() {
        let collector = CollectorFactory::development(2);
        collector.record_metric("a", 1.0);
        collector.record_metric("b", 2.0);
        collector.record_metric("a", 3.0);
        collector.record_metric("a", 4.0);

        assert_eq!(collector.get_metrics("a"), vec![3.0, 4.0]);
        assert_eq!(collector.get_metrics("b"), vec![2.0]);
        assert_eq!(collector.metric_names(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_unknown_metric_queries() {
        let collector = CollectorFactory::development(10);
        assert!(collector.get_metrics("missing").is_empty());
        assert_eq!(collector.get_average_metric("missing"), 0.0);
        assert_eq!(collector.get_percentile_metric("missing", 95.0), 0.0);
        assert!(collector.get_metric_summary("missing").is_none());
    }

    // ==================== Sampling ====================

    #[test]
    fn test_production_sampling_uses_draws() {
        let collector = CollectorFactory::production(0.25, [0.1, 0.3, 0.24, 0.25]);

        let outcomes: Vec<_> = (0..4)
            .map(|i| collector.record_metric("lcp", i as f64))
            .collect();

        assert_eq!(
            outcomes,
            vec![
                RecordOutcome::Recorded,
                RecordOutcome::Sampled,
                RecordOutcome::Recorded,
                RecordOutcome::Sampled
            ]
        );
        assert_eq!(collector.get_metrics("lcp"), vec![0.0, 2.0]);
    }

    #[test]
    fn test_sampled_out_values_reach_nobody() {
        let collector = CollectorFactory::production(0.0, []);
        let observer = RecordingObserver::new();
        let _subscription = collector.subscribe(observer.clone());

        for _ in 0..100 {
            assert_eq!(collector.record_metric("fid", 5.0), RecordOutcome::Sampled);
        }
        assert!(collector.get_metrics("fid").is_empty());
        assert!(observer.seen().is_empty());
    }

    #[test]
    fn test_runtime_sampling_rate_change() {
        let collector = CollectorFactory::production(0.0, []);
        assert_eq!(collector.record_metric("cls", 0.1), RecordOutcome::Sampled);

        collector.set_sampling_rate(1.0);
        assert_eq!(collector.record_metric("cls", 0.1), RecordOutcome::Recorded);
        assert_eq!(collector.sampling_rate(), 1.0);
    }

    // ==================== Observers ====================

    #[test]
    fn test_observer_lifecycle() {
        let collector = CollectorFactory::development(10);
        let first = RecordingObserver::new();
        let second = RecordingObserver::new();

        let first_sub = collector.subscribe(first.clone());
        let _second_sub = collector.subscribe(second.clone());
        assert_eq!(collector.observer_count(), 2);

        collector.record_metric("paint", 1.0);
        first_sub.unsubscribe();
        first_sub.unsubscribe();
        collector.record_metric("paint", 2.0);

        assert_eq!(first.seen(), vec![("paint".to_string(), 1.0)]);
        assert_eq!(
            second.seen(),
            vec![("paint".to_string(), 1.0), ("paint".to_string(), 2.0)]
        );
        assert_eq!(collector.observer_count(), 1);
    }

    #[test]
    fn test_failing_observer_does_not_block_others() {
        let collector = CollectorFactory::development(10);
        let _failing = collector.subscribe(|_: &str, _: f64| -> perfscope::Result<()> {
            Err(perfscope::PerfError::observer("boom"))
        });
        let recorder = RecordingObserver::new();
        let _recording = collector.subscribe(recorder.clone());

        assert_eq!(collector.record_metric("tti", 7.0), RecordOutcome::Recorded);
        assert_eq!(recorder.seen(), vec![("tti".to_string(), 7.0)]);
        assert_eq!(collector.get_metrics("tti"), vec![7.0]);
    }

    // ==================== Sinks ====================

    #[tokio::test]
    async fn test_production_samples_are_forwarded_rounded() {
        let (sink, mut rx) = RecordingSink::channel();
        let collector = CollectorFactory::production(1.0, []).with_sink(sink);

        collector.record_metric("ttfb", 99.5);
        collector.record_metric("ttfb", 0.4);

        let mut values = Vec::new();
        for _ in 0..2 {
            let sample = tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("sample not forwarded")
                .expect("sink channel closed");
            assert_eq!(sample.metric, "ttfb");
            values.push(sample.value);
        }
        values.sort_by(f64::total_cmp);
        assert_eq!(values, vec![0.0, 100.0]);

        // the series keeps the raw values
        assert_eq!(collector.get_metrics("ttfb"), vec![99.5, 0.4]);
    }

    #[tokio::test]
    async fn test_sampled_out_values_are_not_forwarded() {
        let (sink, mut rx) = RecordingSink::channel();
        let collector = CollectorFactory::production(0.5, [0.9]).with_sink(sink);

        assert_eq!(collector.record_metric("inp", 3.0), RecordOutcome::Sampled);
        let received = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(received.is_err());
    }

    #[test]
    fn test_collector_shared_across_threads() {
        let collector = Arc::new(CollectorFactory::development(10_000));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let collector = Arc::clone(&collector);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        collector.record_metric("shared", (t * 500 + i) as f64);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let summary = collector.get_metric_summary("shared").unwrap();
        summary.assert_count(2_000);
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 1_999.0);
    }
}
