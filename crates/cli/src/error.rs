//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError`, `ConfigError` and CLI input errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 matches clap's own code for argument errors.

use puppetdb_client::ClientError;
use puppetdb_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for `pdb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - bad arguments, invalid query text or configuration.
    ///
    /// Scripts should fix the input and not retry the same request.
    UsageError = 2,

    /// Connection error - refused, timed out, DNS or TLS failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The server answered 404 (unknown node, report or certificate).
    NotFound = 4,

    /// The response body did not match the expected shape.
    DecodeError = 5,

    /// The server rejected the client certificate (HTTP 401/403).
    PermissionDenied = 6,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ConnectionRefused(_) | ClientError::Timeout(_) | ClientError::Tls(_) => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else if e.is_decode() {
                    ExitCode::DecodeError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::PermissionDenied,
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { status: 400, .. } => ExitCode::UsageError,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::Schema(_) | ClientError::TypeMismatch(_) => ExitCode::DecodeError,

            ClientError::Encode(_) | ClientError::InvalidUrl(_) | ClientError::MissingValues(_) => {
                ExitCode::UsageError
            }
        }
    }
}

/// Input errors detected by the CLI before any request is sent.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Invalid query JSON: {0}")]
    InvalidQuery(#[source] serde_json::Error),

    #[error("Invalid output format: {0}. Valid formats: json, ndjson")]
    InvalidOutputFormat(String),

    #[error("Puppet Server commands need --master-url or PUPPETDB_MASTER_URL")]
    MissingMasterUrl,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some()
                || cause.downcast_ref::<UsageError>().is_some()
            {
                return ExitCode::UsageError;
            }
        }

        ExitCode::GeneralError
    }
}
