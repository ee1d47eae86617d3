//! Sample and payload types sent to analytics sinks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One forwarded sample; `value` is already rounded
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub metric: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub page: Option<String>,
}

impl MetricSample {
    pub fn new(metric: impl Into<String>, value: f64, page: Option<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.round(),
            timestamp: Utc::now(),
            page,
        }
    }
}

/// Analytics event tagged `performance_metric`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub metric_name: String,
    pub value: f64,
    pub timestamp: i64,
    pub page: Option<String>,
}

impl From<&MetricSample> for AnalyticsEvent {
    fn from(sample: &MetricSample) -> Self {
        Self {
            metric_name: sample.metric.clone(),
            value: sample.value,
            timestamp: sample.timestamp.timestamp_millis(),
            page: sample.page.clone(),
        }
    }
}

/// JSON body POSTed by the HTTP beacon sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconPayload {
    pub metric: String,
    pub value: f64,
    pub timestamp: i64,
    pub url: Option<String>,
    pub user_agent: String,
}

impl BeaconPayload {
    pub fn from_sample(sample: &MetricSample, user_agent: &str) -> Self {
        Self {
            metric: sample.metric.clone(),
            value: sample.value,
            timestamp: sample.timestamp.timestamp_millis(),
            url: sample.page.clone(),
            user_agent: user_agent.to_string(),
        }
    }
}
