//! Configuration validation

use super::models::*;
use tracing::debug;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for PerformanceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating performance configuration");

        if self.max_samples_per_metric == 0 {
            return Err("max_samples_per_metric must be greater than 0".to_string());
        }

        if let Some(rate) = self.sampling_rate {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(format!(
                    "sampling_rate must be between 0.0 and 1.0, got {}",
                    rate
                ));
            }
        }

        self.analytics.validate()
    }
}

impl Validate for AnalyticsConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(endpoint) = &self.endpoint {
            let url = Url::parse(endpoint)
                .map_err(|e| format!("analytics endpoint has invalid URL format: {}", e))?;
            match url.scheme() {
                "http" | "https" => {}
                scheme => {
                    return Err(format!(
                        "analytics endpoint must use http:// or https:// scheme, got: {}",
                        scheme
                    ));
                }
            }
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }

        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be greater than 0".to_string());
        }

        Ok(())
    }
}
