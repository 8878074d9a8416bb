//! Normalizer service endpoints.
//!
//! `POST /api/format` is the whole API: parse failures are HTTP 200 with
//! `success: false` and diagnostics, because a diagnostic is the product
//! the client asked for — only transport-level problems (malformed request
//! JSON) produce an error status, and those are the framework's.

use super::{pages, HealthPayload, JSON_SERVICE_NAME};
use crate::normalizer::{self, FormatOutcome};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Wire request for `POST /api/format`.
///
/// `indent` is a raw JSON value, not an integer: a fractional or non-numeric
/// indent must become a diagnostic in the response body, not a framework
/// rejection.
#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub text: String,
    #[serde(default)]
    pub indent: Option<Value>,
}

/// Wire response for `POST /api/format`. Absent fields are omitted.
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_column: Option<u64>,
}

impl From<FormatOutcome> for FormatResponse {
    fn from(outcome: FormatOutcome) -> Self {
        match outcome {
            FormatOutcome::Success { formatted } => FormatResponse {
                success: true,
                formatted: Some(formatted),
                error: None,
                error_line: None,
                error_column: None,
            },
            FormatOutcome::Failure {
                error,
                line,
                column,
            } => FormatResponse {
                success: false,
                formatted: None,
                error: Some(error),
                error_line: line,
                error_column: column,
            },
        }
    }
}

/// Build the Normalizer router. `with_ui: false` swaps the interactive page
/// at `/` for a JSON service descriptor (API-only mode).
pub fn format_router(with_ui: bool) -> Router {
    Router::new()
        .route("/api/format", post(format_json))
        .route("/", if with_ui { get(index) } else { get(describe) })
        .route("/health", get(health))
}

async fn format_json(Json(request): Json<FormatRequest>) -> Json<FormatResponse> {
    Json(normalizer::reformat(&request.text, request.indent.as_ref()).into())
}

async fn index() -> Html<&'static str> {
    Html(pages::JSON_FORMATTER_PAGE)
}

async fn describe() -> Json<Value> {
    Json(json!({
        "service": JSON_SERVICE_NAME,
        "endpoints": {
            "POST /api/format": "format and validate JSON text",
            "GET /health": "health check",
        },
    }))
}

async fn health() -> Json<HealthPayload> {
    Json(HealthPayload::now(JSON_SERVICE_NAME))
}
