//! REST API endpoint implementations.
//!
//! Each function takes a borrowed [`RequestContext`] and performs exactly one
//! round trip. The typed clients in [`crate::client`] are thin wrappers.

mod certificates;
mod events;
mod facts;
mod mbeans;
mod nodes;
mod reports;
pub mod request;
mod resources;
pub mod status;
pub mod url_encoding;

pub use certificates::{
    delete_certificate, get_certificate, list_certificates, update_certificate_state,
};
pub use events::{event_counts, query_events};
pub use facts::{fact_per_node, list_fact_names, node_facts, query_facts};
pub use mbeans::{get_mbean, get_version};
pub use nodes::list_nodes;
pub use reports::{query_reports, report_by_hash};
pub use request::{CA_PREFIX, PDB_QUERY_PREFIX, RequestContext, STATUS_PREFIX, build_url};
pub use resources::query_resources;
pub use status::get_service_status;
pub use url_encoding::{encode_path_segment, encode_query_value};
