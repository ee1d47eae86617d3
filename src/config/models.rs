//! Configuration models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default per-series sample capacity
pub const DEFAULT_MAX_SAMPLES: usize = 1000;

/// Sampling rate applied in production when no override is configured
pub const PRODUCTION_SAMPLING_RATE: f64 = 0.1;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse an environment name; anything other than `production`/`prod` is development
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    #[inline]
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Performance instrumentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,
    /// Explicit sampling rate override (production only)
    #[serde(default)]
    pub sampling_rate: Option<f64>,
    /// Maximum samples retained per metric series
    #[serde(default = "default_max_samples")]
    pub max_samples_per_metric: usize,
    /// Analytics sink configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            sampling_rate: None,
            max_samples_per_metric: DEFAULT_MAX_SAMPLES,
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl PerformanceConfig {
    /// Development defaults: every sample retained, no analytics forwarding
    pub fn development() -> Self {
        Self::default()
    }

    /// Production defaults: 10% sampling, analytics forwarding enabled
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            ..Self::default()
        }
    }

    pub fn with_sampling_rate(mut self, rate: f64) -> Self {
        self.sampling_rate = Some(rate);
        self
    }

    pub fn with_capacity(mut self, max_samples: usize) -> Self {
        self.max_samples_per_metric = max_samples;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.analytics.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }

    #[inline]
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    /// Sampling rate actually applied by the collector.
    ///
    /// Development always keeps every sample. Production uses the override
    /// (clamped to `[0, 1]`) or falls back to 10%.
    pub fn effective_sampling_rate(&self) -> f64 {
        if !self.is_production() {
            return 1.0;
        }
        match self.sampling_rate {
            Some(rate) if rate.is_finite() => rate.clamp(0.0, 1.0),
            _ => PRODUCTION_SAMPLING_RATE,
        }
    }
}

/// Analytics sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// HTTP endpoint receiving JSON beacons
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Page or URL tag attached to every forwarded sample
    #[serde(default)]
    pub page: Option<String>,
    /// User agent reported in beacons
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Emit structured `performance_metric` analytics events
    #[serde(default = "default_true")]
    pub event_log: bool,
    /// Record a uniquely named performance mark per sample
    #[serde(default = "default_true")]
    pub performance_marks: bool,
    /// Beacon request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            page: None,
            user_agent: default_user_agent(),
            event_log: true,
            performance_marks: true,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_samples() -> usize {
    DEFAULT_MAX_SAMPLES
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

fn default_request_timeout_ms() -> u64 {
    5000
}
