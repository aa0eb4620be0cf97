//! Contract tests for SearchClient against the dashboard search endpoint.
//!
//! These tests use wiremock to simulate `GET /api/search`. Paths, query
//! strings, and response envelopes mirror the live dashboard contract.

use meridian_api_client::{ApiConfig, DashboardClient};
use meridian_core::ResultKind;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a DashboardClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> DashboardClient {
    let config = ApiConfig::for_base_url(mock_server.uri().parse().unwrap());
    DashboardClient::new(config).unwrap()
}

// ── GET /api/search ──────────────────────────────────────────────────

#[tokio::test]
async fn query_sends_q_and_decodes_the_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "lap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"id": "1", "type": "product", "name": "Laptop Pro X", "sku": "P001"},
                {"id": "c-2", "type": "customer", "name": "Lapland Trading", "email": "hello@lapland.test"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client.search().query("lap").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].kind, ResultKind::Product);
    assert_eq!(results[0].sku.as_deref(), Some("P001"));
    assert_eq!(results[1].kind, ResultKind::Customer);
    assert_eq!(results[1].email.as_deref(), Some("hello@lapland.test"));
}

#[tokio::test]
async fn query_url_encodes_the_term() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "laptop pro & co"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client.search().query("laptop pro & co").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn query_returns_empty_for_empty_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client.search().query("xyz").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn query_tolerates_a_missing_results_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client.search().query("anything").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn query_returns_error_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.search().query("lap").await;
    assert!(result.is_err());
    match result.unwrap_err() {
        meridian_api_client::ApiClientError::Api { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Serde resilience (forward compatibility) ─────────────────────────

#[tokio::test]
async fn unknown_result_kind_maps_to_the_catch_all() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"id": "s-1", "type": "shipment", "name": "Container 12", "eta": "tomorrow"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client.search().query("container").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind, ResultKind::Unknown);
}
