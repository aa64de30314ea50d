//! Report endpoint tests.
//!
//! # Invariants
//! - Hyphenated (v3) and underscored (v4) keys decode into the same fields
//! - A `null` transaction uuid decodes to `None`
//! - `report_by_hash` sends exactly `["=","hash",<hash>]`

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_reports_with_hyphenated_keys() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("reports/reports_v3_keys.json");

    Mock::given(method("GET"))
        .and(path("/pdb/query/v4/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let reports = pdb_client(&mock_server).reports("", None).await.unwrap();

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.certname, "node123");
    assert_eq!(report.puppet_version.as_deref(), Some("3.2.4-1"));
    assert_eq!(report.hash, "abcdefg");
    assert_eq!(report.report_format, Some(3));
    assert_eq!(report.configuration_version.as_deref(), Some("1388423716"));
    assert_eq!(report.transaction_uuid, None);
    assert_eq!(report.start_time.as_deref(), Some("2013-12-30T19:15:05.314Z"));
    assert_eq!(report.end_time.as_deref(), Some("2013-12-30T19:15:51.521Z"));
    assert_eq!(report.receive_time.as_deref(), Some("2013-12-30T19:16:14.911Z"));
    assert!(report.metrics.is_none());
}

#[tokio::test]
async fn test_report_by_hash() {
    let mock_server = MockServer::start().await;

    let hash = "38ff2aef3ffb7800fe85b322280ade2b867c8d27";
    let fixture = load_fixture("reports/report_by_hash.json");

    Mock::given(method("GET"))
        .and(path("/pdb/query/v4/reports"))
        .and(query_param("query", format!(r#"["=","hash","{hash}"]"#).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reports = pdb_client(&mock_server).report_by_hash(hash).await.unwrap();
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert_eq!(report.hash, hash);
    assert_eq!(report.status.as_deref(), Some("changed"));
    assert_eq!(report.corrective_change.as_deref(), Some("true"));
    assert_eq!(report.code_id, None);
    assert_eq!(report.metric("resources", "total"), Some(412.0));
    assert_eq!(report.metric("time", "total"), Some(6.42));
    assert_eq!(report.metric("events", "failure"), None);

    let logs = report.logs.as_ref().unwrap();
    assert_eq!(logs.data.len(), 1);
    assert_eq!(logs.data[0].level.as_deref(), Some("notice"));

    let events = report.resource_events.as_ref().unwrap();
    assert!(events.href.as_deref().unwrap().ends_with("/events"));
    assert!(events.data.is_empty());

    let pairs = received_query(&mock_server).await;
    assert_eq!(pairs.len(), 1);
}
