//! Puppet Server status-service endpoint tests.
//!
//! # Invariants
//! - Every status request asks for `level=debug`
//! - Service metrics are read from `status.experimental`

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};

async fn mount_status(server: &MockServer, service: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/status/v1/services/{service}")))
        .and(query_param("level", "debug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_profiler() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "puppet-profiler", "master/profiler.json").await;

    let status = master_client(&mock_server).profiler().await.unwrap();
    assert!(status.is_running());
    assert_eq!(status.service_version, "6.2.0");

    let profiler = status.experimental().unwrap();
    assert_eq!(profiler.function_metrics.len(), 2);
    assert_eq!(profiler.function_metrics[0].function, "lookup");
    assert_eq!(profiler.function_metrics[0].count, 42);
    assert_eq!(profiler.resource_metrics[0].resource, "Class[Motd]");
    assert_eq!(profiler.catalog_metrics[0].aggregate, 4060.0);
    assert!(profiler.puppetdb_metrics.is_empty());
}

#[tokio::test]
async fn test_jruby() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "jruby-metrics", "master/jruby.json").await;

    let status = master_client(&mock_server).jruby().await.unwrap();
    let jruby = status.experimental().unwrap();
    let metrics = jruby.metrics.as_ref().unwrap();
    assert_eq!(metrics.num_jrubies, 4);
    assert_eq!(metrics.num_free_jrubies, 3);
    assert_eq!(metrics.average_free_jrubies, 2.75);
    assert_eq!(metrics.borrowed_instances.len(), 1);

    let request = metrics.borrowed_instances[0]
        .reason
        .as_ref()
        .and_then(|r| r.request.as_ref())
        .unwrap();
    assert_eq!(request.uri.as_deref(), Some("/puppet/v3/catalog/node123"));
    assert_eq!(
        jruby
            .jruby_pool_lock_status
            .as_ref()
            .unwrap()
            .current_state
            .as_deref(),
        Some(":not-in-use")
    );
}

#[tokio::test]
async fn test_master() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "master", "master/master.json").await;

    let status = master_client(&mock_server).master().await.unwrap();
    let master = status.experimental().unwrap();
    assert_eq!(master.http_metrics.len(), 2);
    assert_eq!(master.http_metrics[1].route_id, "total");
    assert_eq!(
        master.http_client_metrics[0].metric_id,
        ["puppetdb", "command", "replace_catalog"]
    );
}

#[tokio::test]
async fn test_status_service_jvm_metrics() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "status-service", "master/status_service.json").await;

    let status = master_client(&mock_server).service().await.unwrap();
    let jvm = status.experimental().unwrap().jvm_metrics.as_ref().unwrap();

    assert_eq!(jvm.up_time_ms, 86_400_000);
    assert_eq!(jvm.threading.unwrap().thread_count, 64);
    assert_eq!(jvm.heap_memory.unwrap().max, 2_147_483_648);
    assert_eq!(jvm.non_heap_memory.unwrap().max, -1);
    let collectors: Vec<&str> = jvm.gc_stats.keys().map(String::as_str).collect();
    assert_eq!(collectors, ["PS MarkSweep", "PS Scavenge"]);
    assert_eq!(
        jvm.gc_stats["PS Scavenge"].last_gc_info.unwrap().duration_ms,
        12
    );
}

#[tokio::test]
async fn test_status_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status/v1/services/master"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = master_client(&mock_server).master().await.unwrap_err();
    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
