//! Configuration loading utilities
//!
//! This module provides utilities for loading configuration from the
//! environment and from YAML files.

use super::models::*;
use super::validation::Validate;
use crate::utils::error::{PerfError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable selecting the deployment environment
pub const ENV_ENVIRONMENT: &str = "PERFSCOPE_ENV";
/// Fallback environment variable for the deployment environment
pub const ENV_APP_ENVIRONMENT: &str = "APP_ENV";
pub const ENV_SAMPLING_RATE: &str = "PERFSCOPE_SAMPLING_RATE";
pub const ENV_MAX_SAMPLES: &str = "PERFSCOPE_MAX_SAMPLES";
pub const ENV_ANALYTICS_ENDPOINT: &str = "PERFSCOPE_ANALYTICS_ENDPOINT";
pub const ENV_PAGE: &str = "PERFSCOPE_PAGE";

impl PerformanceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading performance configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(name) = get(ENV_ENVIRONMENT).or_else(|| get(ENV_APP_ENVIRONMENT)) {
            config.environment = Environment::from_name(&name);
        }
        if let Some(rate) = get(ENV_SAMPLING_RATE) {
            config.sampling_rate = Some(rate.trim().parse().map_err(|e| {
                PerfError::config(format!("Invalid sampling rate '{}': {}", rate, e))
            })?);
        }
        if let Some(max) = get(ENV_MAX_SAMPLES) {
            config.max_samples_per_metric = max.trim().parse().map_err(|e| {
                PerfError::config(format!("Invalid max samples '{}': {}", max, e))
            })?;
        }
        if let Some(endpoint) = get(ENV_ANALYTICS_ENDPOINT) {
            config.analytics.endpoint = Some(endpoint.trim().to_string());
        }
        if let Some(page) = get(ENV_PAGE) {
            config.analytics.page = Some(page);
        }

        config.validate().map_err(PerfError::validation)?;

        debug!(
            environment = %config.environment,
            sampling_rate = config.effective_sampling_rate(),
            "Performance configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading performance configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate().map_err(PerfError::validation)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }
}
