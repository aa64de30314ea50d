//! PuppetDB and Puppet Server REST API client.
//!
//! This crate provides a typed client for the PuppetDB v4 query API
//! (nodes, facts, events, reports, resources, metrics) and for the Puppet
//! Server status and certificate-authority APIs. It also exposes the pieces
//! those clients are built from: the structured query encoder, the parameter
//! merger, the request path builder and the polymorphic value decoder.

pub mod client;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod params;
pub mod query;
mod serde_helpers;
#[cfg(any(feature = "test-utils", test))]
pub mod testing;
pub mod tracing;
pub mod value;

pub use client::builder::{MasterClientBuilder, PuppetDbClientBuilder};
pub use client::{MasterClient, PuppetDbClient};
pub use decode::{decode_many, decode_one};
pub use error::{ClientError, Result};
pub use logging::{RequestAttempt, RequestLogger, TracingLogger};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    Certificate, CertificateFingerprints, CertificateState, DesiredState, Event, EventCount,
    EventCountSubject, Fact, JrubyStatus, JvmStatus, MasterStatus, MbeanValue, Node,
    ProfilerStatus, Report, Resource, StatusService, Version,
};
pub use params::{ParameterSet, merge_param};
pub use query::{QueryExpr, query_to_json};
pub use self::tracing::{TracingConfig, TracingError, TracingGuard};
pub use value::{PolymorphicValue, TypeMismatch, ValueKind};
