//! Report models.
//!
//! A report's `logs`, `metrics` and `resource_events` arrive either expanded
//! (`data` filled) or collapsed to an `href` pointing at the sub-collection.

use serde::{Deserialize, Serialize};

use super::events::Event;
use crate::serde_helpers::{opt_string_from_scalar, string_or_null, vec_or_null};

/// One Puppet run report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    #[serde(deserialize_with = "string_or_null")]
    pub certname: String,
    #[serde(deserialize_with = "string_or_null")]
    pub hash: String,
    #[serde(alias = "puppet-version")]
    pub puppet_version: Option<String>,
    #[serde(alias = "report-format")]
    pub report_format: Option<u64>,
    #[serde(alias = "configuration-version")]
    pub configuration_version: Option<String>,
    pub catalog_uuid: Option<String>,
    #[serde(alias = "transaction-uuid")]
    pub transaction_uuid: Option<String>,
    #[serde(alias = "start-time")]
    pub start_time: Option<String>,
    #[serde(alias = "end-time")]
    pub end_time: Option<String>,
    #[serde(alias = "receive-time")]
    pub receive_time: Option<String>,
    pub producer_timestamp: Option<String>,
    pub producer: Option<String>,
    pub code_id: Option<String>,
    pub job_id: Option<String>,
    pub cached_catalog_status: Option<String>,
    #[serde(alias = "Status")]
    pub status: Option<String>,
    #[serde(alias = "Environment")]
    pub environment: Option<String>,
    pub noop: Option<bool>,
    pub noop_pending: Option<bool>,
    #[serde(deserialize_with = "opt_string_from_scalar")]
    pub corrective_change: Option<String>,
    pub logs: Option<ReportLogs>,
    pub metrics: Option<ReportMetrics>,
    pub resource_events: Option<ReportResourceEvents>,
}

/// Log lines of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLogs {
    pub href: Option<String>,
    #[serde(deserialize_with = "vec_or_null")]
    pub data: Vec<ReportLogEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLogEntry {
    pub level: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub file: Option<String>,
    pub line: Option<u64>,
    pub time: Option<String>,
    #[serde(deserialize_with = "vec_or_null")]
    pub tags: Vec<String>,
}

/// Run metrics of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetrics {
    pub href: Option<String>,
    #[serde(deserialize_with = "vec_or_null")]
    pub data: Vec<ReportMetricEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetricEntry {
    #[serde(deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(deserialize_with = "string_or_null")]
    pub name: String,
    pub value: f64,
}

/// Resource events of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportResourceEvents {
    pub href: Option<String>,
    #[serde(deserialize_with = "vec_or_null")]
    pub data: Vec<Event>,
}

impl Report {
    /// Look up a run metric by category and name (e.g. `time`, `total`).
    pub fn metric(&self, category: &str, name: &str) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| {
            m.data
                .iter()
                .find(|e| e.category == category && e.name == name)
                .map(|e| e.value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_report() {
        let report: Report = serde_json::from_str(
            r#"{
                "certname": "node123",
                "hash": "abcdefg",
                "status": "changed",
                "noop": false,
                "corrective_change": false,
                "logs": {"href": "/pdb/query/v4/reports/abcdefg/logs",
                         "data": [{"level": "notice", "message": "Applied catalog", "tags": ["notice"]}]},
                "metrics": {"href": "/pdb/query/v4/reports/abcdefg/metrics",
                            "data": [{"category": "time", "name": "total", "value": 12.5}]},
                "resource_events": {"href": "/pdb/query/v4/reports/abcdefg/events"}
            }"#,
        )
        .unwrap();

        assert_eq!(report.corrective_change.as_deref(), Some("false"));
        assert_eq!(report.logs.as_ref().unwrap().data[0].tags, ["notice"]);
        assert_eq!(report.metric("time", "total"), Some(12.5));
        assert_eq!(report.metric("time", "config_retrieval"), None);
        let events = report.resource_events.unwrap();
        assert!(events.href.is_some());
        assert!(events.data.is_empty());
    }

    #[test]
    fn test_capitalized_legacy_keys() {
        let report: Report =
            serde_json::from_str(r#"{"certname": "n", "Status": "failed", "Environment": "dev"}"#)
                .unwrap();
        assert_eq!(report.status.as_deref(), Some("failed"));
        assert_eq!(report.environment.as_deref(), Some("dev"));
    }
}
