//! Configuration integration tests
//!
//! Loading from YAML files and environment lookups, and the effect of the
//! loaded configuration on a collector.

#[cfg(test)]
mod tests {
    use perfscope::config::Validate;
    use perfscope::{Environment, MetricsCollector, PerfError, PerformanceConfig};
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_yaml_file_drives_collector() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "environment: production\nsampling_rate: 1.0\nmax_samples_per_metric: 3\nanalytics:\n  event_log: false\n  performance_marks: false"
        )
        .unwrap();

        let config = PerformanceConfig::from_file(file.path()).await.unwrap();
        assert_eq!(config.environment, Environment::Production);

        let collector = MetricsCollector::new(config);
        assert_eq!(collector.sampling_rate(), 1.0);
        for i in 0..10 {
            collector.record_metric("load", i as f64);
        }
        assert_eq!(collector.get_metrics("load"), vec![7.0, 8.0, 9.0]);
        assert!(collector.performance_marks().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_yaml_values_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_samples_per_metric: 0").unwrap();

        let err = PerformanceConfig::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, PerfError::Validation(_)));
    }

    #[test]
    fn test_env_lookup_production() {
        let config = PerformanceConfig::from_lookup(lookup(&[
            ("PERFSCOPE_ENV", "production"),
            ("PERFSCOPE_SAMPLING_RATE", "0.5"),
            ("PERFSCOPE_MAX_SAMPLES", "250"),
            ("PERFSCOPE_ANALYTICS_ENDPOINT", "https://analytics.example.com/perf"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.effective_sampling_rate(), 0.5);
        assert_eq!(config.max_samples_per_metric, 250);
        assert_eq!(
            config.analytics.endpoint.as_deref(),
            Some("https://analytics.example.com/perf")
        );
    }

    #[test]
    fn test_env_lookup_rejects_bad_endpoint() {
        let result = PerformanceConfig::from_lookup(lookup(&[(
            "PERFSCOPE_ANALYTICS_ENDPOINT",
            "ftp://analytics.example.com",
        )]));
        assert!(matches!(result, Err(PerfError::Validation(_))));
    }

    #[test]
    fn test_builder_configs_validate() {
        assert!(PerformanceConfig::development().validate().is_ok());
        assert!(PerformanceConfig::production().validate().is_ok());
        assert!(
            PerformanceConfig::production()
                .with_sampling_rate(1.5)
                .validate()
                .is_err()
        );
    }
}
