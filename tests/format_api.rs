//! HTTP-level tests for the Normalizer service.
//!
//! Each test drives the real router in-process with `tower::oneshot` — no
//! sockets, no spawned servers. Parse failures are asserted as HTTP 200
//! with `success: false`: diagnostics are the service's product, not an
//! error condition.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> axum::Router {
    docpress::format_router(true)
}

async fn post_format(body: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/format")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).expect("response must be JSON");
    (status, value)
}

async fn get(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, bytes.to_vec())
}

#[tokio::test]
async fn single_quote_document_formats_successfully() {
    let (status, body) = post_format(json!({ "text": "{'a': 1}" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let formatted = body["formatted"].as_str().expect("formatted present");
    assert!(formatted.contains("\"a\": 1"), "got: {formatted}");
    assert!(body.get("error").is_none(), "error must be omitted on success");
}

#[tokio::test]
async fn invalid_document_reports_position_with_http_200() {
    let (status, body) = post_format(json!({ "text": "{invalid" })).await;

    assert_eq!(status, StatusCode::OK, "parse failure is not an HTTP error");
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("JSON Error: "));
    assert!(body["error_line"].as_u64().is_some());
    assert!(body["error_column"].as_u64().is_some());
    assert!(body.get("formatted").is_none());
}

#[tokio::test]
async fn indent_is_honoured() {
    let (_, body) = post_format(json!({ "text": "{\"a\": {\"b\": 1}}", "indent": 2 })).await;

    assert_eq!(body["success"], true);
    let formatted = body["formatted"].as_str().unwrap();
    assert!(formatted.contains("\n  \"a\""), "got: {formatted}");
    assert!(formatted.contains("\n    \"b\""), "got: {formatted}");
}

#[tokio::test]
async fn fractional_indent_is_a_message_only_failure() {
    let (status, body) = post_format(json!({ "text": "{\"a\": 1}", "indent": 2.5 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("integer"));
    assert!(body.get("error_line").is_none(), "no position for bad indent");
    assert!(body.get("error_column").is_none());
}

#[tokio::test]
async fn negative_indent_is_a_message_only_failure() {
    let (_, body) = post_format(json!({ "text": "{\"a\": 1}", "indent": -4 })).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("non-negative"));
}

#[tokio::test]
async fn empty_text_is_a_diagnostic_not_a_crash() {
    let (status, body) = post_format(json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_line"], 1);
}

#[tokio::test]
async fn missing_text_field_is_rejected_by_the_framework() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/format")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"indent\": 2}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error(), "got: {}", response.status());
}

#[tokio::test]
async fn health_reports_the_service_name() {
    let (status, _, bytes) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "JSON Formatter API");
    assert!(body["timestamp"].as_str().unwrap().len() >= 19);
}

#[tokio::test]
async fn root_serves_the_test_ui() {
    let (status, content_type, bytes) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    let page = String::from_utf8(bytes).unwrap();
    assert!(page.contains("JSON Formatter"), "got: {page:.80}");
}

#[tokio::test]
async fn api_only_mode_replaces_the_ui_with_a_descriptor() {
    let response = docpress::format_router(false)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("descriptor must be JSON");
    assert_eq!(body["service"], "JSON Formatter API");
}
