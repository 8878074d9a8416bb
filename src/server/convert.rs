//! Renderer service endpoints.
//!
//! Two ways in — pasted form content and a multipart file upload — both
//! funnelling into [`crate::convert`]. Responses stream the document back
//! with a Content-Disposition filename derived from the title; every
//! failure is a JSON `{error}` body with a 400/500 status, never a partial
//! document.

use super::{pages, HealthPayload, MARKDOWN_SERVICE_NAME};
use crate::config::{OutputFormat, RenderConfig};
use crate::convert::{convert, title_from_filename};
use crate::error::ConvertError;
use crate::output::RenderedDocument;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Wire request for `POST /convert/paste` (urlencoded form).
#[derive(Debug, Deserialize)]
pub struct PasteForm {
    pub content: String,
    pub output_format: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Build the Renderer router around one shared config. `with_ui: false`
/// swaps the interactive page at `/` for a JSON service descriptor.
pub fn convert_router(config: Arc<RenderConfig>, with_ui: bool) -> Router {
    Router::new()
        .route("/convert/paste", post(convert_paste))
        .route("/convert/upload", post(convert_upload))
        .route("/", if with_ui { get(index) } else { get(describe) })
        .route("/health", get(health))
        .with_state(config)
}

async fn convert_paste(
    State(config): State<Arc<RenderConfig>>,
    Form(form): Form<PasteForm>,
) -> Result<Response, ConvertError> {
    let format: OutputFormat = form.output_format.parse()?;
    let title = form
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(config.default_title.as_str());

    let document = convert(&form.content, format, title, &config).await?;
    Ok(file_response(document))
}

async fn convert_upload(
    State(config): State<Arc<RenderConfig>>,
    mut multipart: Multipart,
) -> Result<Response, ConvertError> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut output_format: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ConvertError::Multipart(e.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ConvertError::Multipart(e.to_string()))?;
                file_bytes = Some(bytes.to_vec());
            }
            Some("output_format") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ConvertError::Multipart(e.to_string()))?;
                output_format = Some(text);
            }
            // Unknown fields are ignored, matching lenient form handling.
            _ => {}
        }
    }

    let format: OutputFormat = output_format
        .ok_or(ConvertError::MissingField("output_format"))?
        .parse()?;
    let bytes = file_bytes.ok_or(ConvertError::MissingField("file"))?;
    let content = String::from_utf8(bytes).map_err(|_| ConvertError::InvalidEncoding)?;
    let title = title_from_filename(file_name.as_deref(), &config.default_title);

    let document = convert(&content, format, &title, &config).await?;
    Ok(file_response(document))
}

fn file_response(document: RenderedDocument) -> Response {
    (
        [
            (header::CONTENT_TYPE, document.media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", document.filename),
            ),
        ],
        document.bytes,
    )
        .into_response()
}

async fn index() -> Html<&'static str> {
    Html(pages::MARKDOWN_CONVERTER_PAGE)
}

async fn describe() -> Json<Value> {
    Json(json!({
        "service": MARKDOWN_SERVICE_NAME,
        "endpoints": {
            "POST /convert/paste": "convert pasted markdown (form: content, output_format, title)",
            "POST /convert/upload": "convert an uploaded markdown file (multipart: file, output_format)",
            "GET /health": "health check",
        },
    }))
}

async fn health() -> Json<HealthPayload> {
    Json(HealthPayload::now(MARKDOWN_SERVICE_NAME))
}
