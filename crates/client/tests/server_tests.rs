//! PuppetDB metrics (mbean) and version endpoint tests.
//!
//! # Invariants
//! - Mbean names travel in the path with `:`, `=` and `,` left as-is
//! - Bytes after the first complete JSON document are ignored

mod common;

use common::*;
use puppetdb_client::MbeanValue;
use puppetdb_client::models::{MBEAN_NUM_NODES, MBEAN_NUM_RESOURCES};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_metric_resources_per_node() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/pdb/query/v4/metrics/mbean/com.puppetlabs.puppetdb.query.population:type=default,name=avg-resources-per-node",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture_text("metrics/avg_resources_per_node.json")),
        )
        .mount(&mock_server)
        .await;

    let value = pdb_client(&mock_server)
        .metric_resources_per_node()
        .await
        .unwrap();
    assert_eq!(value, 309.130);
}

#[tokio::test]
async fn test_population_gauges() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/pdb/query/v4/metrics/mbean/{MBEAN_NUM_NODES}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Value": 12}"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/pdb/query/v4/metrics/mbean/{MBEAN_NUM_RESOURCES}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Value": 4944}"#))
        .mount(&mock_server)
        .await;

    let client = pdb_client(&mock_server);
    assert_eq!(client.metric_num_nodes().await.unwrap(), 12.0);
    assert_eq!(client.metric_num_resources().await.unwrap(), 4944.0);

    let raw: MbeanValue = client.metric(MBEAN_NUM_NODES).await.unwrap();
    assert_eq!(raw.value, 12.0);
}

#[tokio::test]
async fn test_metric_as_custom_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/query/v4/metrics/mbean/java.lang:type=Memory"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"HeapMemoryUsage": {"used": 1024, "max": 4096}, "ObjectPendingFinalizationCount": 0}"#,
        ))
        .mount(&mock_server)
        .await;

    let raw: serde_json::Value = pdb_client(&mock_server)
        .metric("java.lang:type=Memory")
        .await
        .unwrap();
    assert_eq!(raw["HeapMemoryUsage"]["used"], 1024);
}

#[tokio::test]
async fn test_version_with_trailing_garbage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/query/v4/version"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture_text("version/trailing_comma.txt")),
        )
        .mount(&mock_server)
        .await;

    let version = pdb_client(&mock_server).version().await.unwrap();
    assert_eq!(version.version, "2.2.0");
}

#[tokio::test]
async fn test_version_array_is_schema_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/query/v4/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["2.2.0"]"#))
        .mount(&mock_server)
        .await;

    let err = pdb_client(&mock_server).version().await.unwrap_err();
    assert!(matches!(err, ClientError::Schema(_)), "got {err:?}");
}
