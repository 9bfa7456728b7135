mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::TestApp;
use contract_service::services::providers::mock::MockTextProvider;
use contract_service::services::ContractPrompt;
use contract_service::startup::{build_router, AppState};
use reqwest::Client;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "contract-service");
    assert_eq!(body["generation"], "unconfigured");
}

#[tokio::test]
async fn health_reports_ready_when_provider_is_wired() {
    let provider = Arc::new(MockTextProvider::new(true));
    let app = TestApp::spawn(Some(provider)).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["generation"], "ready");
}

#[tokio::test]
async fn index_page_is_served_regardless_of_configuration() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("Failed to get response body");
    assert!(!body.is_empty());
    // The page drives the API from the browser
    assert!(body.contains("/generate-contract"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header")
        .to_str()
        .expect("Invalid x-request-id");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn inbound_request_id_is_propagated() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .header("x-request-id", "test-correlation-42")
        .send()
        .await
        .expect("Failed to execute request");

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header")
        .to_str()
        .expect("Invalid x-request-id");
    assert_eq!(request_id, "test-correlation-42");
}

#[tokio::test]
async fn router_serves_index_without_binding_a_socket() {
    let state = AppState {
        config: common::test_config(),
        prompt: ContractPrompt::load(None).expect("Failed to load default prompt"),
        text_provider: None,
    };

    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Router call failed");

    assert_eq!(response.status(), StatusCode::OK);
}
