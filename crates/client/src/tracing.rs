//! Tracing setup and request spans.
//!
//! [`TracingConfig::init`] installs the process-wide subscriber: an env
//! filter, a stderr log layer and, when an OTLP collector is configured, an
//! OpenTelemetry layer. The exported resource names the PuppetDB and Puppet
//! Server the process talks to.
//!
//! Every request runs inside a [`request_span`]; its W3C `traceparent` is
//! forwarded to the server by [`inject_trace_context`].
//!
//! ```rust,ignore
//! let guard = TracingConfig::new()
//!     .with_default_filter("info")
//!     .with_targets(&config)
//!     .with_otlp_endpoint("http://localhost:4317")
//!     .init()?;
//! // ...
//! guard.shutdown();
//! ```

use std::collections::HashMap;
use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use puppetdb_config::Config;
use reqwest::{Method, RequestBuilder, Url};
use tracing::Span;
use tracing::field::Empty;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const INSTRUMENTATION_SCOPE: &str = "puppetdb-client";

const EXPORT_TIMEOUT: Duration = Duration::from_secs(5);

/// Resource attribute naming the PuppetDB base URL.
pub const ATTR_PUPPETDB_URL: &str = "puppetdb.url";

/// Resource attribute naming the Puppet Server base URL.
pub const ATTR_MASTER_URL: &str = "puppet.server.url";

/// Subscriber settings for one process.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP/gRPC collector; spans are only exported when set.
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    /// Filter directive used when `RUST_LOG` is unset.
    pub default_filter: String,
    pub puppetdb_url: Option<String>,
    pub master_url: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: "pdb".to_string(),
            default_filter: "warn".to_string(),
            puppetdb_url: None,
            master_url: None,
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_default_filter(mut self, directive: impl Into<String>) -> Self {
        self.default_filter = directive.into();
        self
    }

    /// Record the PuppetDB and Puppet Server URLs of `config` on the exported resource.
    pub fn with_targets(mut self, config: &Config) -> Self {
        self.puppetdb_url = Some(config.connection.base_url.clone());
        self.master_url = config.master_url.clone();
        self
    }

    fn resource(&self) -> Resource {
        let mut attributes = vec![
            KeyValue::new("service.name", self.service_name.clone()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ];
        if let Some(url) = &self.puppetdb_url {
            attributes.push(KeyValue::new(ATTR_PUPPETDB_URL, url.clone()));
        }
        if let Some(url) = &self.master_url {
            attributes.push(KeyValue::new(ATTR_MASTER_URL, url.clone()));
        }
        Resource::builder().with_attributes(attributes).build()
    }

    fn tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_timeout(EXPORT_TIMEOUT)
            .build()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        Ok(SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(self.resource())
            .build())
    }

    /// Install the global subscriber.
    ///
    /// Hold the returned guard until exit and call [`TracingGuard::shutdown`]
    /// so batched spans reach the collector.
    ///
    /// # Errors
    /// Fails when the OTLP exporter cannot be built or a global subscriber
    /// is already installed.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));

        let provider = self
            .otlp_endpoint
            .as_deref()
            .map(|endpoint| self.tracer_provider(endpoint))
            .transpose()?;
        let otel_layer = provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer().with_tracer(provider.tracer(INSTRUMENTATION_SCOPE))
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(otel_layer)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        Ok(TracingGuard { provider })
    }
}

/// Keeps the tracer provider alive until shutdown.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Flush pending spans and stop the exporter.
    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(e) = provider.shutdown() {
                tracing::warn!(error = %e, "Failed to flush spans");
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize tracing: {0}")]
    InitError(String),
}

/// Span for one request against `endpoint`.
///
/// The encoded AST query, when the target carries one, is recorded decoded
/// as `puppetdb.query`. The status code is filled in once the server answers.
pub fn request_span(method: &Method, endpoint: &str, url: &str) -> Span {
    let name = format!("{method} {endpoint}");
    let span = tracing::info_span!(
        "puppetdb.request",
        otel.name = name.as_str(),
        otel.kind = "client",
        http.request.method = %method,
        puppetdb.endpoint = endpoint,
        url.full = url,
        puppetdb.query = Empty,
        http.response.status_code = Empty,
    );
    if let Some(query) = query_of(url) {
        span.record("puppetdb.query", query.as_str());
    }
    span
}

fn query_of(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(name, _)| name == "query")
        .map(|(_, value)| value.into_owned())
}

/// Add the W3C trace context of `span` to an outgoing request.
///
/// Adds nothing when `span` is not recorded by an OpenTelemetry layer.
pub fn inject_trace_context(builder: RequestBuilder, span: &Span) -> RequestBuilder {
    let mut headers: HashMap<String, String> = HashMap::new();
    TraceContextPropagator::new().inject_context(&span.context(), &mut headers);
    headers
        .into_iter()
        .fold(builder, |builder, (name, value)| builder.header(name, value))
}
