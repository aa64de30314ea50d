//! Request logging.
//!
//! Each client owns one [`RequestLogger`] and reports every outgoing request
//! through it before the request is sent. The default [`TracingLogger`]
//! writes `tracing` events; tests can inject their own recorder.

use std::fmt;

use tracing::{debug, info};

/// One outgoing HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestAttempt<'a> {
    pub method: &'a str,
    pub url: &'a str,
}

/// Sink for request attempts.
pub trait RequestLogger: Send + Sync + fmt::Debug {
    /// Record that a request is about to be sent.
    fn record_attempt(&self, attempt: &RequestAttempt<'_>);
}

/// Logger that emits a `tracing` event per attempt.
///
/// Attempts are logged at `debug` level, or `info` when verbose.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    verbose: bool,
}

impl TracingLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl RequestLogger for TracingLogger {
    fn record_attempt(&self, attempt: &RequestAttempt<'_>) {
        if self.verbose {
            info!(method = attempt.method, url = attempt.url, "Sending request");
        } else {
            debug!(method = attempt.method, url = attempt.url, "Sending request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet() {
        assert!(!TracingLogger::default().is_verbose());
        assert!(TracingLogger::new(true).is_verbose());
    }

    #[test]
    fn test_record_attempt_without_subscriber() {
        let logger = TracingLogger::new(true);
        logger.record_attempt(&RequestAttempt {
            method: "GET",
            url: "http://localhost:8080/pdb/query/v4/nodes",
        });
    }
}
