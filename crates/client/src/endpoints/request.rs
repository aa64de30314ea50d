//! Request construction and the single-attempt send path.
//!
//! Responsibilities:
//! - Build request targets from a base URL, API prefix, endpoint and parameters.
//! - Send one request, reporting it to the request logger and metrics collector.
//! - Map non-success statuses to [`ClientError::ApiError`].
//! - Read and decode JSON bodies into typed records.
//!
//! Does NOT handle:
//! - Retries (every call is a single round trip)
//! - Endpoint-specific paths (see the sibling endpoint modules)

use std::time::{Duration, Instant};

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::Instrument;

use crate::decode::{decode_many, decode_one, parse_body, short_type_name};
use crate::endpoints::url_encoding::encode_query_value;
use crate::error::{ClientError, Result};
use crate::logging::{RequestAttempt, RequestLogger};
use crate::metrics::MetricsCollector;
use crate::params::ParameterSet;
use crate::tracing::{inject_trace_context, request_span};

/// PuppetDB v4 query API.
pub const PDB_QUERY_PREFIX: &str = "/pdb/query/v4/";

/// Puppet Server status API.
pub const STATUS_PREFIX: &str = "/status/v1/services/";

/// Puppet Server certificate authority API.
pub const CA_PREFIX: &str = "/puppet-ca/v1/";

/// Build the full request target.
///
/// Trailing slashes on `base` are trimmed. Parameters are appended after `?`,
/// or after a single `&` when `endpoint` already carries a query string.
/// Pair order follows the parameter set and is unspecified.
///
/// ```
/// use puppetdb_client::ParameterSet;
/// use puppetdb_client::endpoints::build_url;
///
/// let params = ParameterSet::from([("query".to_string(), r#"["=","certname","a"]"#.to_string())]);
/// assert_eq!(
///     build_url("http://pdb:8080/", "/pdb/query/v4/", "facts", &params),
///     "http://pdb:8080/pdb/query/v4/facts?query=%5B%22%3D%22%2C%22certname%22%2C%22a%22%5D"
/// );
/// ```
pub fn build_url(base: &str, api_prefix: &str, endpoint: &str, params: &ParameterSet) -> String {
    let mut url = format!("{}{}{}", base.trim_end_matches('/'), api_prefix, endpoint);
    if params.is_empty() {
        return url;
    }

    if !endpoint.contains('?') {
        url.push('?');
    } else if !url.ends_with('?') && !url.ends_with('&') {
        url.push('&');
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_query_value(v)))
        .collect::<Vec<_>>()
        .join("&");
    url.push_str(&query);
    url
}

/// Everything a request needs from the owning client.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub http: &'a Client,
    pub base_url: &'a str,
    /// Overall request timeout, reported in [`ClientError::Timeout`].
    pub timeout: Duration,
    pub logger: &'a dyn RequestLogger,
    pub metrics: Option<&'a MetricsCollector>,
}

impl RequestContext<'_> {
    fn record_error(&self, endpoint: &str, method: &Method, error: &ClientError) {
        if let Some(m) = self.metrics {
            m.record_client_error(endpoint, method.as_str(), error);
        }
    }

    fn record_decode_failure<T>(&self, endpoint: &str) {
        if let Some(m) = self.metrics {
            m.record_decode_failure(endpoint, short_type_name::<T>());
        }
    }
}

/// Send one request and return the response if its status is a success.
///
/// `endpoint` is the low-cardinality label used for metrics.
pub async fn send_request(
    ctx: &RequestContext<'_>,
    method: Method,
    url: &str,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<Response> {
    let mut builder = ctx.http.request(method.clone(), url);
    if let Some(body) = body {
        builder = builder.json(body);
    }
    let span = request_span(&method, endpoint, url);
    let builder = inject_trace_context(builder, &span);

    ctx.logger.record_attempt(&RequestAttempt {
        method: method.as_str(),
        url,
    });
    if let Some(m) = ctx.metrics {
        m.record_request(endpoint, method.as_str());
    }

    let start = Instant::now();
    let result = builder.send().instrument(span.clone()).await;
    let elapsed = start.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from_transport(e, url, ctx.timeout);
            if let Some(m) = ctx.metrics {
                m.record_request_duration(endpoint, method.as_str(), elapsed, None);
            }
            ctx.record_error(endpoint, &method, &err);
            return Err(err);
        }
    };

    let status = response.status();
    span.record("http.response.status_code", status.as_u16());
    if let Some(m) = ctx.metrics {
        m.record_request_duration(endpoint, method.as_str(), elapsed, Some(status.as_u16()));
    }

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = match response.text().await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string(),
    };
    let err = ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    };
    ctx.record_error(endpoint, &method, &err);
    Err(err)
}

/// Send a request whose body is required (PUT and POST).
///
/// Fails with [`ClientError::MissingValues`] before any I/O when `body` is `None`.
pub async fn send_with_body(
    ctx: &RequestContext<'_>,
    method: Method,
    url: &str,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<Response> {
    let Some(body) = body else {
        return Err(ClientError::MissingValues(format!("{method} {endpoint}")));
    };
    send_request(ctx, method, url, endpoint, Some(body)).await
}

/// Read a response body as the first JSON value it contains.
pub async fn read_json(response: Response) -> Result<Value> {
    let bytes = response.bytes().await?;
    parse_body(&bytes)
}

/// GET `url` and return the parsed body.
pub async fn get_json(ctx: &RequestContext<'_>, url: &str, endpoint: &str) -> Result<Value> {
    let response = send_request(ctx, Method::GET, url, endpoint, None).await?;
    read_json(response).await.inspect_err(|e| {
        ctx.record_error(endpoint, &Method::GET, e);
    })
}

/// GET `url` and decode a JSON array of `T`.
pub async fn get_many<T: DeserializeOwned>(
    ctx: &RequestContext<'_>,
    url: &str,
    endpoint: &str,
) -> Result<Vec<T>> {
    let raw = get_json(ctx, url, endpoint).await?;
    decode_many(raw).inspect_err(|_| ctx.record_decode_failure::<T>(endpoint))
}

/// GET `url` and decode a JSON object as `T`.
pub async fn get_one<T: DeserializeOwned>(
    ctx: &RequestContext<'_>,
    url: &str,
    endpoint: &str,
) -> Result<T> {
    let raw = get_json(ctx, url, endpoint).await?;
    decode_one(raw).inspect_err(|_| ctx.record_decode_failure::<T>(endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLogger;

    fn params(pairs: &[(&str, &str)]) -> ParameterSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(
            build_url("http://localhost:8080", PDB_QUERY_PREFIX, "nodes", &ParameterSet::new()),
            "http://localhost:8080/pdb/query/v4/nodes"
        );
    }

    #[test]
    fn test_build_url_trims_trailing_slashes() {
        assert_eq!(
            build_url("http://localhost:8080///", PDB_QUERY_PREFIX, "version", &ParameterSet::new()),
            "http://localhost:8080/pdb/query/v4/version"
        );
    }

    #[test]
    fn test_build_url_single_param() {
        let url = build_url(
            "http://pdb",
            PDB_QUERY_PREFIX,
            "events",
            &params(&[("query", "a b")]),
        );
        assert_eq!(url, "http://pdb/pdb/query/v4/events?query=a%20b");
    }

    #[test]
    fn test_build_url_has_no_trailing_ampersand() {
        let url = build_url(
            "http://pdb",
            PDB_QUERY_PREFIX,
            "event-counts",
            &params(&[("query", "q"), ("summarize-by", "certname"), ("limit", "5")]),
        );
        assert!(!url.ends_with('&'));
        assert_eq!(url.matches('&').count(), 2);
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn test_build_url_endpoint_with_query_string() {
        let url = build_url(
            "https://puppet:8140",
            STATUS_PREFIX,
            "master?level=debug",
            &params(&[("extra", "1")]),
        );
        assert_eq!(
            url,
            "https://puppet:8140/status/v1/services/master?level=debug&extra=1"
        );

        let url = build_url("http://pdb", "/", "x?", &params(&[("a", "1")]));
        assert_eq!(url, "http://pdb/x?a=1");
    }

    #[tokio::test]
    async fn test_put_without_body_fails_before_sending() {
        let http = Client::new();
        let logger = RecordingLogger::default();
        let ctx = RequestContext {
            http: &http,
            base_url: "http://127.0.0.1:1",
            timeout: Duration::from_secs(1),
            logger: &logger,
            metrics: None,
        };

        let err = send_with_body(
            &ctx,
            Method::PUT,
            "http://127.0.0.1:1/puppet-ca/v1/certificate_status/web01",
            "certificate_status",
            None,
        )
        .await
        .unwrap_err();

        match err {
            ClientError::MissingValues(what) => assert_eq!(what, "PUT certificate_status"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(logger.attempts().is_empty());
    }
}
