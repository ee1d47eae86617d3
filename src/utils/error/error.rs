//! Error types for perfscope
//!
//! Instrumentation is fail-open: observer and sink failures are represented
//! here so they can be logged, but they never escape `record_metric`.

use thiserror::Error;

/// Result type alias for perfscope
pub type Result<T> = std::result::Result<T, PerfError>;

/// Main error type for perfscope
#[derive(Error, Debug)]
pub enum PerfError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Observer callback errors
    #[error("Observer error: {0}")]
    Observer(String),

    /// Analytics sink errors
    #[error("Sink error: {0}")]
    Sink(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PerfError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn observer<S: Into<String>>(message: S) -> Self {
        Self::Observer(message.into())
    }

    pub fn sink<S: Into<String>>(message: S) -> Self {
        Self::Sink(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error came from instrumentation fan-out (observers or sinks)
    pub fn is_dispatch_error(&self) -> bool {
        matches!(self, Self::Observer(_) | Self::Sink(_) | Self::HttpClient(_))
    }
}
