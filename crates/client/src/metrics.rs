//! Metrics collection for API call performance.
//!
//! This module provides metrics collection for PuppetDB and Puppet Server calls:
//! - Request latency histograms
//! - Request counters
//! - Error categorization
//! - Response decoding failures
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "puppetdb_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "puppetdb_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "puppetdb_api_errors_total";

/// Metric name for response decoding failure counter.
pub const METRIC_DECODE_FAILURES: &str = "puppetdb_api_decode_failures_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Non-success status outside the 4xx/5xx ranges
    Api,
    /// Request timeout
    Timeout,
    /// TLS/SSL errors
    Tls,
    /// Query encoding or response decoding errors
    Decode,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Api => "api",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Tls => "tls",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    /// Categorize a ClientError for metrics purposes.
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::ConnectionRefused(_) => ErrorCategory::Transport,
            ClientError::Tls(_) => ErrorCategory::Tls,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Api
                }
            }
            ClientError::Schema(_) | ClientError::TypeMismatch(_) | ClientError::Encode(_) => {
                ErrorCategory::Decode
            }
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_request() {
                    ErrorCategory::Transport
                } else if e.is_timeout() {
                    ErrorCategory::Timeout
                } else {
                    ErrorCategory::Unknown
                }
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for PuppetDB and Puppet Server calls.
///
/// A lightweight wrapper around the `metrics` crate macros that keeps the
/// label set consistent.
///
/// # Example
///
/// ```rust,ignore
/// use puppetdb_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("nodes", "GET", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    /// Whether metrics collection is enabled.
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error from a ClientError, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        let category = ErrorCategory::from(error);
        self.record_error(endpoint, method, category);
    }

    /// Record a response body that did not match the expected record type.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint label
    /// * `model_type` - The type name that failed to decode (e.g., "Node", "Report")
    pub fn record_decode_failure(&self, endpoint: &str, model_type: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DECODE_FAILURES,
            "endpoint" => endpoint.to_string(),
            "model_type" => model_type,
        )
        .increment(1);
    }
}
