//! Event and event-count models.
//!
//! Field names follow the v4 API (`resource_type`); the hyphenated v3
//! spellings are accepted as aliases.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{opt_string_from_scalar, string_or_null, vec_or_null};
use crate::value::PolymorphicValue;

/// One resource event from the `events` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "string_or_null")]
    pub certname: String,
    pub report: Option<String>,
    pub status: Option<String>,
    pub timestamp: Option<String>,
    #[serde(alias = "run-start-time")]
    pub run_start_time: Option<String>,
    #[serde(alias = "run-end-time")]
    pub run_end_time: Option<String>,
    #[serde(alias = "report-receive-time")]
    pub report_receive_time: Option<String>,
    #[serde(alias = "resource-type")]
    pub resource_type: Option<String>,
    #[serde(alias = "resource-title")]
    pub resource_title: Option<String>,
    pub property: Option<String>,
    pub name: Option<String>,
    #[serde(alias = "new-value", skip_serializing_if = "PolymorphicValue::is_absent")]
    pub new_value: PolymorphicValue,
    #[serde(alias = "old-value", skip_serializing_if = "PolymorphicValue::is_absent")]
    pub old_value: PolymorphicValue,
    pub message: Option<String>,
    pub file: Option<String>,
    pub line: Option<u64>,
    #[serde(alias = "containment-path", deserialize_with = "vec_or_null")]
    pub containment_path: Vec<String>,
    #[serde(alias = "containing-class")]
    pub containing_class: Option<String>,
    pub environment: Option<String>,
    #[serde(alias = "configuration-version")]
    pub configuration_version: Option<String>,
    #[serde(deserialize_with = "opt_string_from_scalar")]
    pub corrective_change: Option<String>,
}

/// The subject an event count is aggregated over.
///
/// Summarizing by certname fills only `title`; by resource fills both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventCountSubject {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    pub title: Option<String>,
}

/// One row from the `event-counts` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventCount {
    #[serde(alias = "subject-type", deserialize_with = "string_or_null")]
    pub subject_type: String,
    pub subject: EventCountSubject,
    pub failures: u64,
    pub successes: u64,
    pub noops: u64,
    pub skips: u64,
}
