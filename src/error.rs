//! Error types for the docpress library.
//!
//! The two services fail in fundamentally different ways:
//!
//! * The **Normalizer** never surfaces a Rust error for bad input — a JSON
//!   parse failure is its product, returned as
//!   [`crate::normalizer::FormatOutcome::Failure`] inside an HTTP 200 so the
//!   client can show the diagnostic. Only the Renderer path uses
//!   [`ConvertError`].
//!
//! * The **Renderer** distinguishes request problems (empty content, unknown
//!   output format, non-UTF-8 upload — the caller's fault, HTTP 400) from
//!   conversion problems (PDF engine missing, crashed, or hung — our side,
//!   HTTP 500). [`ConvertError::is_client_error`] encodes that split so the
//!   HTTP layer maps variants to statuses without a second match.

use thiserror::Error;

/// All errors returned by the Renderer and its HTTP layer.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Request validation (caller's fault) ──────────────────────────────
    /// The markdown content was empty or whitespace-only.
    #[error("content cannot be empty")]
    EmptyContent,

    /// The requested output format is not one of the supported ones.
    #[error("output_format must be 'html' or 'pdf' (got '{0}')")]
    UnsupportedFormat(String),

    /// Uploaded bytes were not valid UTF-8 text.
    #[error("file must be valid text with UTF-8 encoding")]
    InvalidEncoding,

    /// A required form/multipart field was absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The multipart stream itself could not be read.
    #[error("malformed multipart request: {0}")]
    Multipart(String),

    // ── Conversion failures (our side) ───────────────────────────────────
    /// The configured PDF converter binary could not be spawned at all.
    #[error("PDF engine '{command}' is not installed or not on PATH")]
    PdfEngineMissing { command: String },

    /// The PDF converter ran but exited non-zero or produced no output.
    #[error("PDF engine '{command}' failed: {detail}")]
    PdfEngineFailed { command: String, detail: String },

    /// The PDF converter exceeded the configured wall-clock cap.
    #[error("PDF engine '{command}' timed out after {secs}s")]
    PdfEngineTimeout { command: String, secs: u64 },

    // ── Config errors ────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConvertError {
    /// Whether the failure is the caller's fault (→ 400) or ours (→ 500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ConvertError::EmptyContent
                | ConvertError::UnsupportedFormat(_)
                | ConvertError::InvalidEncoding
                | ConvertError::MissingField(_)
                | ConvertError::Multipart(_)
        )
    }
}
