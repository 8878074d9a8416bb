//! HTTP layer: one axum router per service.
//!
//! Both services are stateless per-request handlers. The Normalizer router
//! carries no state at all; the Renderer router shares one immutable
//! [`crate::RenderConfig`] behind an `Arc`. Handlers extract typed bodies
//! (`Json` / `Form` / `Multipart`) and return `IntoResponse` values; error
//! mapping lives in one `IntoResponse` impl so handlers stay `?`-friendly.

mod convert;
mod format;
mod launch;
mod pages;

pub use convert::convert_router;
pub use format::format_router;
pub use launch::serve;

use crate::error::ConvertError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Local, SecondsFormat};
use serde::Serialize;
use serde_json::json;

/// Service name reported by the Normalizer's health endpoint.
pub const JSON_SERVICE_NAME: &str = "JSON Formatter API";

/// Service name reported by the Renderer's health endpoint.
pub const MARKDOWN_SERVICE_NAME: &str = "Markdown Converter API";

/// Body of `GET /health` on both services.
#[derive(Debug, Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

impl HealthPayload {
    pub(crate) fn now(service: &'static str) -> Self {
        Self {
            status: "healthy",
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            service,
        }
    }
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "conversion failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
