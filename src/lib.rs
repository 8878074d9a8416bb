//! # docpress
//!
//! Two small, stateless HTTP microservices behind one library:
//!
//! * **Normalizer** — re-serializes lenient JSON-like text into canonical
//!   JSON, returning structured diagnostics (message, 1-based line and
//!   column) when the text does not parse.
//! * **Renderer** — converts Markdown to a styled HTML document or, through
//!   an external HTML-to-PDF engine, to PDF bytes.
//!
//! Both are thin wrappers over existing engines. The JSON parser
//! (serde_json), the Markdown engine (comrak), and the PDF layout engine
//! (a converter subprocess behind the [`PdfEngine`] trait) are consumed as
//! black boxes — none of them is reimplemented here.
//!
//! ## Renderer pipeline
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. markdown  comrak → HTML fragment (GFM tables, strikethrough,
//!  │               task lists, footnotes, header ids, hard breaks)
//!  ├─ 2. template  fixed document shell + local-time footer stamp
//!  └─ 3. pdf       (pdf only) stdin → converter subprocess → stdout
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use docpress::{convert, OutputFormat, RenderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenderConfig::default();
//!     let doc = convert("# Hello", OutputFormat::Html, "Greeting", &config).await?;
//!     assert_eq!(doc.media_type, "text/html");
//!     assert_eq!(doc.filename, "Greeting.html");
//!     Ok(())
//! }
//! ```
//!
//! The Normalizer is a pure function:
//!
//! ```rust
//! use docpress::reformat;
//!
//! let outcome = reformat("{'a': 1}", None);
//! assert!(outcome.is_success());
//! ```
//!
//! ## Servers
//!
//! The `server` feature (default) builds two binaries, `jsonfmtd` and
//! `mdpressd`, each serving one router from [`server`]. Routers are plain
//! `axum::Router` values, so embedders can mount them under their own
//! service instead of running the binaries.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod normalizer;
pub mod output;
pub mod pipeline;
pub mod server;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{OutputFormat, RenderConfig, RenderConfigBuilder, DEFAULT_TITLE};
pub use convert::{convert, title_from_filename};
pub use error::ConvertError;
pub use normalizer::{reformat, FormatOutcome};
pub use output::RenderedDocument;
pub use pipeline::pdf::{CommandPdfEngine, PdfEngine};
pub use server::{convert_router, format_router, serve};
