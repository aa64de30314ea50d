//! Error types for the PuppetDB client.

use std::time::Duration;
use thiserror::Error;

use crate::value::TypeMismatch;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during PuppetDB and Puppet Server client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A query expression could not be serialized to the wire format.
    #[error("Failed to encode query: {0}")]
    Encode(#[source] serde_json::Error),

    /// A polymorphic value was extracted as the wrong type.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// The response body did not have the expected JSON shape.
    #[error("Unexpected response shape: {0}")]
    Schema(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the server.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// TLS material could not be loaded or applied.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request that needs a body was issued without one.
    #[error("No values specified for {0}")]
    MissingValues(String),
}

impl ClientError {
    /// Check if this error came from the transport rather than from
    /// encoding or decoding.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Timeout(_) | Self::ConnectionRefused(_) | Self::Tls(_)
        )
    }

    /// Check if this error is a decoding failure of a response body.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Schema(_) | Self::TypeMismatch(_))
    }

    /// Check if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Classify a `reqwest` failure for an attempt against `url`.
    pub(crate) fn from_transport(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::ConnectionRefused(url.to_string())
        } else {
            Self::HttpError(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{PolymorphicValue, ValueKind};

    #[test]
    fn test_error_is_transport_error() {
        let err = ClientError::Timeout(Duration::from_secs(1));
        assert!(err.is_transport_error());

        let err = ClientError::ConnectionRefused("localhost:8080".to_string());
        assert!(err.is_transport_error());

        let err = ClientError::Schema("expected array".to_string());
        assert!(!err.is_transport_error());
    }

    #[test]
    fn test_type_mismatch_converts() {
        let value = PolymorphicValue::String("9708003".to_string());
        let err: ClientError = value.as_number().unwrap_err().into();

        assert!(err.is_decode_error());
        match err {
            ClientError::TypeMismatch(m) => {
                assert_eq!(m.expected, ValueKind::Number);
                assert_eq!(m.found, ValueKind::String);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_is_not_found() {
        let err = ClientError::ApiError {
            status: 404,
            url: "http://localhost:8140/puppet-ca/v1/certificate_status/x".to_string(),
            message: "Not Found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("404"));

        let err = ClientError::ApiError {
            status: 500,
            url: "test".to_string(),
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_encode_error_display() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::Encode(inner);
        assert!(err.to_string().starts_with("Failed to encode query"));
    }
}
