//! Data models for PuppetDB and Puppet Server responses.
//!
//! Types are organized by endpoint family in submodules and re-exported here
//! for convenient access.

pub mod certificates;
pub mod events;
pub mod facts;
pub mod master;
pub mod metrics;
pub mod nodes;
pub mod reports;
pub mod resources;
pub mod version;

pub use certificates::{
    Certificate, CertificateFingerprints, CertificateState, CertificateStateChange, DesiredState,
};
pub use events::{Event, EventCount, EventCountSubject};
pub use facts::Fact;
pub use master::{
    JrubyExperimental, JrubyMetrics, JrubyStatus, JvmExperimental, JvmMetrics, JvmStatus,
    MasterExperimental, MasterStatus, ProfilerExperimental, ProfilerStatus, StatusBody,
    StatusService,
};
pub use metrics::{
    MBEAN_AVG_RESOURCES_PER_NODE, MBEAN_NUM_NODES, MBEAN_NUM_RESOURCES, MbeanValue,
};
pub use nodes::Node;
pub use reports::{
    Report, ReportLogEntry, ReportLogs, ReportMetricEntry, ReportMetrics, ReportResourceEvents,
};
pub use resources::Resource;
pub use version::Version;
