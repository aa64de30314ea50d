//! Puppet Server status-service models.
//!
//! Every `/status/v1/services/{name}?level=debug` response shares one
//! envelope; the service-specific metrics sit under `status.experimental`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::vec_or_null;

/// Envelope of a status-service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusService<T> {
    #[serde(default)]
    pub service_version: String,
    #[serde(default)]
    pub service_status_version: u64,
    #[serde(default)]
    pub detail_level: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<StatusBody<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBody<T> {
    #[serde(default)]
    pub experimental: Option<T>,
}

impl<T> StatusService<T> {
    /// The debug-level metrics, when the server included them.
    pub fn experimental(&self) -> Option<&T> {
        self.status.as_ref().and_then(|s| s.experimental.as_ref())
    }

    /// Whether the service reports itself as running.
    pub fn is_running(&self) -> bool {
        self.state.as_deref() == Some("running")
    }
}

/// `puppet-profiler` service status.
pub type ProfilerStatus = StatusService<ProfilerExperimental>;
/// `jruby-metrics` service status.
pub type JrubyStatus = StatusService<JrubyExperimental>;
/// `master` service status.
pub type MasterStatus = StatusService<MasterExperimental>;
/// `status-service` status (JVM metrics).
pub type JvmStatus = StatusService<JvmExperimental>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProfilerExperimental {
    #[serde(deserialize_with = "vec_or_null")]
    pub function_metrics: Vec<ProfilerFunctionMetric>,
    #[serde(deserialize_with = "vec_or_null")]
    pub resource_metrics: Vec<ProfilerResourceMetric>,
    #[serde(deserialize_with = "vec_or_null")]
    pub catalog_metrics: Vec<ProfilerCatalogMetric>,
    #[serde(deserialize_with = "vec_or_null")]
    pub puppetdb_metrics: Vec<ProfilerCatalogMetric>,
}

/// Timing of one Puppet function, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerFunctionMetric {
    pub function: String,
    pub count: u64,
    pub mean: f64,
    pub aggregate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerResourceMetric {
    pub resource: String,
    pub count: u64,
    pub mean: f64,
    pub aggregate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerCatalogMetric {
    pub metric: String,
    pub count: u64,
    pub mean: f64,
    pub aggregate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JrubyExperimental {
    pub jruby_pool_lock_status: Option<JrubyPoolLockStatus>,
    pub metrics: Option<JrubyMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JrubyPoolLockStatus {
    pub current_state: Option<String>,
    pub last_change_time: Option<String>,
}

/// JRuby pool counters. Averages are in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JrubyMetrics {
    pub num_jrubies: u64,
    pub num_free_jrubies: u64,
    pub num_pool_locks: u64,
    pub borrow_count: u64,
    pub borrow_timeout_count: u64,
    pub borrow_retry_count: u64,
    pub return_count: u64,
    pub requested_count: u64,
    pub queue_limit_hit_count: u64,
    pub queue_limit_hit_rate: f64,
    pub average_requested_jrubies: f64,
    pub average_free_jrubies: f64,
    pub average_borrow_time: f64,
    pub average_wait_time: f64,
    pub average_lock_wait_time: f64,
    pub average_lock_held_time: f64,
    #[serde(deserialize_with = "vec_or_null")]
    pub borrowed_instances: Vec<JrubyBorrowedInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JrubyBorrowedInstance {
    pub time: u64,
    pub duration_millis: u64,
    pub reason: Option<JrubyBorrowReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JrubyBorrowReason {
    pub request: Option<JrubyBorrowRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JrubyBorrowRequest {
    pub uri: Option<String>,
    pub request_method: Option<String>,
    pub route_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MasterExperimental {
    #[serde(deserialize_with = "vec_or_null")]
    pub http_metrics: Vec<MasterHttpMetric>,
    #[serde(deserialize_with = "vec_or_null")]
    pub http_client_metrics: Vec<MasterHttpClientMetric>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MasterHttpMetric {
    pub route_id: String,
    pub count: u64,
    pub mean: f64,
    pub aggregate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MasterHttpClientMetric {
    pub metric_name: String,
    #[serde(deserialize_with = "vec_or_null")]
    pub metric_id: Vec<String>,
    pub count: u64,
    pub mean: f64,
    pub aggregate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JvmExperimental {
    pub jvm_metrics: Option<JvmMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JvmMetrics {
    pub cpu_usage: f64,
    pub gc_cpu_usage: f64,
    pub up_time_ms: u64,
    pub start_time_ms: u64,
    pub threading: Option<JvmThreading>,
    pub heap_memory: Option<JvmMemory>,
    pub non_heap_memory: Option<JvmMemory>,
    pub file_descriptors: Option<JvmFileDescriptors>,
    /// Per-collector statistics keyed by collector name (e.g. `PS Scavenge`).
    pub gc_stats: BTreeMap<String, JvmGcCollector>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JvmThreading {
    pub thread_count: u64,
    pub peak_thread_count: u64,
}

/// Memory pool sizes in bytes. `max` is `-1` when the pool is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JvmMemory {
    pub committed: i64,
    pub init: i64,
    pub max: i64,
    pub used: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JvmFileDescriptors {
    pub max: u64,
    pub used: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JvmGcCollector {
    pub count: u64,
    pub total_time_ms: u64,
    pub last_gc_info: Option<JvmLastGcInfo>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JvmLastGcInfo {
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_status() {
        let status: MasterStatus = serde_json::from_str(
            r#"{"service_version": "7.9.2", "service_status_version": 1,
                "detail_level": "info", "state": "running", "status": {}}"#,
        )
        .unwrap();
        assert!(status.is_running());
        assert!(status.experimental().is_none());
    }

    #[test]
    fn test_jvm_gc_stats_keyed_by_collector() {
        let status: JvmStatus = serde_json::from_str(
            r#"{"service_version": "7.9.2", "state": "running", "status": {"experimental": {
                "jvm-metrics": {
                    "cpu-usage": 0.5, "up-time-ms": 1000, "gc-cpu-usage": 0.01, "start-time-ms": 5,
                    "non-heap-memory": {"committed": 10, "init": 2, "max": -1, "used": 9},
                    "gc-stats": {"PS Scavenge": {"count": 3, "total-time-ms": 40,
                                                 "last-gc-info": {"duration-ms": 7}}}
                }}}}"#,
        )
        .unwrap();
        let jvm = status.experimental().unwrap().jvm_metrics.as_ref().unwrap();
        assert_eq!(jvm.non_heap_memory.unwrap().max, -1);
        let scavenge = jvm.gc_stats["PS Scavenge"];
        assert_eq!(scavenge.last_gc_info.unwrap().duration_ms, 7);
    }
}
