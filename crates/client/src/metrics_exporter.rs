//! Prometheus exposition of the client metrics.
//!
//! `pdb --metrics-bind ADDR` installs the exporter as the global `metrics`
//! recorder and serves `/metrics` until the process exits. The series
//! written by [`crate::metrics::MetricsCollector`] are described on install,
//! so scrapes carry help text and units.

use std::net::{AddrParseError, SocketAddr};

use metrics::{Unit, describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::{
    METRIC_DECODE_FAILURES, METRIC_ERRORS_TOTAL, METRIC_REQUEST_DURATION, METRIC_REQUESTS_TOTAL,
};

/// Request latency buckets in seconds, from node lookups to large report scans.
const REQUEST_DURATION_BUCKETS: &[f64] = &[0.005, 0.025, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 15.0, 60.0];

/// Handle to the installed exporter.
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the exporter and start serving `/metrics` on `bind_addr`.
    ///
    /// `bind_addr` is an `ip:port` pair; host names are rejected. Must be
    /// called from inside a Tokio runtime.
    ///
    /// # Errors
    /// Fails on a malformed address, when another recorder is installed, or
    /// when the listener cannot start.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr =
            bind_addr
                .parse::<SocketAddr>()
                .map_err(|source| MetricsExporterError::InvalidBindAddress {
                    addr: bind_addr.to_string(),
                    source,
                })?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                REQUEST_DURATION_BUCKETS,
            )?
            .with_http_listener(addr)
            .install()?;
        describe_client_metrics();

        info!(%addr, "Serving Prometheus metrics on /metrics");
        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn describe_client_metrics() {
    describe_histogram!(
        METRIC_REQUEST_DURATION,
        Unit::Seconds,
        "Round-trip time of PuppetDB and Puppet Server requests"
    );
    describe_counter!(
        METRIC_REQUESTS_TOTAL,
        "Requests sent, by endpoint and method"
    );
    describe_counter!(
        METRIC_ERRORS_TOTAL,
        "Failed requests, by endpoint and error category"
    );
    describe_counter!(
        METRIC_DECODE_FAILURES,
        "Responses that did not match the expected record type"
    );
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid metrics bind address '{addr}': {source}")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Failed to start Prometheus exporter: {0}")]
    Build(#[from] BuildError),
}
