//! HTTP beacon delivery tests
//!
//! A production collector configured with an analytics endpoint must POST
//! every recorded sample without blocking the recording call.

#[cfg(test)]
mod tests {
    use perfscope::{AnalyticsConfig, MetricsCollector, PerformanceConfig, RecordOutcome};
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn production_config(endpoint: String) -> PerformanceConfig {
        PerformanceConfig::production()
            .with_sampling_rate(1.0)
            .with_analytics(AnalyticsConfig {
                endpoint: Some(endpoint),
                page: Some("/search".to_string()),
                user_agent: "perfscope-it/1.0".to_string(),
                ..AnalyticsConfig::default()
            })
    }

    async fn wait_for_requests(server: &MockServer, expected: usize) -> usize {
        for _ in 0..100 {
            let received = server.received_requests().await.map(|r| r.len()).unwrap_or(0);
            if received >= expected {
                return received;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        server.received_requests().await.map(|r| r.len()).unwrap_or(0)
    }

    #[tokio::test]
    async fn test_recorded_samples_are_beaconed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/beacon"))
            .and(header("user-agent", "perfscope-it/1.0"))
            .and(body_partial_json(serde_json::json!({
                "metric": "search_render",
                "value": 42.0,
                "url": "/search",
                "userAgent": "perfscope-it/1.0"
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let collector = MetricsCollector::new(production_config(format!("{}/beacon", server.uri())));
        assert_eq!(collector.record_metric("search_render", 41.6), RecordOutcome::Recorded);

        assert_eq!(wait_for_requests(&server, 1).await, 1);
        assert_eq!(collector.performance_marks().len(), 1);
        assert!(collector.performance_marks()[0].starts_with("search_render-"));
    }

    #[tokio::test]
    async fn test_failing_endpoint_does_not_affect_recording() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let collector = MetricsCollector::new(production_config(server.uri()));
        for i in 0..5 {
            assert_eq!(collector.record_metric("scroll_jank", i as f64), RecordOutcome::Recorded);
        }

        assert_eq!(wait_for_requests(&server, 5).await, 5);
        assert_eq!(collector.get_metrics("scroll_jank").len(), 5);
    }

    #[tokio::test]
    async fn test_development_never_beacons() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let config = PerformanceConfig::development().with_endpoint(server.uri());
        let collector = MetricsCollector::new(config);
        collector.record_metric("dev_only", 1.0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(collector.performance_marks().is_empty());
    }
}
