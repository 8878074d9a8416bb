//! Configuration types for Markdown-to-HTML/PDF conversion.
//!
//! All Renderer behaviour is controlled through [`RenderConfig`], built via
//! its [`RenderConfigBuilder`]. One immutable struct behind an `Arc` is
//! shared by every request handler — there is no per-request mutation, so
//! the services stay stateless.
//!
//! The PDF engine slot holds an `Arc<dyn PdfEngine>`: embedders and tests
//! inject their own implementation, while the default is a
//! [`CommandPdfEngine`] subprocess wrapper.

use crate::error::ConvertError;
use crate::pipeline::pdf::{CommandPdfEngine, PdfEngine, DEFAULT_PDF_COMMAND, DEFAULT_PDF_TIMEOUT_SECS};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Title used when a request supplies none and no upload filename is usable.
pub const DEFAULT_TITLE: &str = "Document";

/// Requested output format for a conversion.
///
/// Parsed from the exact lowercase strings `"html"` / `"pdf"`; anything
/// else is an [`ConvertError::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Pdf,
}

impl OutputFormat {
    /// Media type sent in the Content-Type header.
    pub fn media_type(self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html",
            OutputFormat::Pdf => "application/pdf",
        }
    }

    /// File extension used in the suggested download filename.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(ConvertError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Configuration for the Renderer service.
///
/// Built via [`RenderConfig::builder()`] or [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use docpress::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .pdf_command("weasyprint")
///     .pdf_args(["-", "-"])
///     .pdf_timeout_secs(30)
///     .build()
///     .unwrap();
/// # let _ = config;
/// ```
#[derive(Clone)]
pub struct RenderConfig {
    /// Fallback document title.
    pub default_title: String,

    /// The HTML-to-PDF engine. Opaque: given an HTML document string it
    /// returns PDF bytes or a [`ConvertError`]. Never retried.
    pub pdf_engine: Arc<dyn PdfEngine>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            pdf_engine: Arc::new(CommandPdfEngine::default()),
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("default_title", &self.default_title)
            .field("pdf_engine", &"<dyn PdfEngine>")
            .finish()
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            default_title: DEFAULT_TITLE.to_string(),
            pdf_command: DEFAULT_PDF_COMMAND.to_string(),
            pdf_args: None,
            pdf_timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
            pdf_engine: None,
        }
    }
}

/// Builder for [`RenderConfig`].
///
/// `pdf_command` / `pdf_args` / `pdf_timeout_secs` configure the default
/// subprocess engine; setting an explicit [`RenderConfigBuilder::pdf_engine`]
/// overrides all three.
#[derive(Clone)]
pub struct RenderConfigBuilder {
    default_title: String,
    pdf_command: String,
    pdf_args: Option<Vec<String>>,
    pdf_timeout_secs: u64,
    pdf_engine: Option<Arc<dyn PdfEngine>>,
}

impl RenderConfigBuilder {
    pub fn default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Converter binary invoked for PDF output (default: `wkhtmltopdf`).
    pub fn pdf_command(mut self, command: impl Into<String>) -> Self {
        self.pdf_command = command.into();
        self
    }

    /// Arguments passed to the converter binary. The default set pipes
    /// stdin to stdout (`--quiet --encoding utf-8 - -`).
    pub fn pdf_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pdf_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Wall-clock cap on one converter invocation, in seconds.
    pub fn pdf_timeout_secs(mut self, secs: u64) -> Self {
        self.pdf_timeout_secs = secs;
        self
    }

    /// Use a pre-constructed engine instead of the subprocess default.
    pub fn pdf_engine(mut self, engine: Arc<dyn PdfEngine>) -> Self {
        self.pdf_engine = Some(engine);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RenderConfig, ConvertError> {
        if self.pdf_command.trim().is_empty() {
            return Err(ConvertError::InvalidConfig(
                "PDF command must not be empty".into(),
            ));
        }
        if self.pdf_timeout_secs == 0 {
            return Err(ConvertError::InvalidConfig(
                "PDF timeout must be ≥ 1 second".into(),
            ));
        }

        let pdf_engine = match self.pdf_engine {
            Some(engine) => engine,
            None => {
                let engine = match self.pdf_args {
                    Some(args) => CommandPdfEngine::with_args(
                        self.pdf_command,
                        args,
                        self.pdf_timeout_secs,
                    ),
                    None => CommandPdfEngine::new(self.pdf_command, self.pdf_timeout_secs),
                };
                Arc::new(engine) as Arc<dyn PdfEngine>
            }
        };

        Ok(RenderConfig {
            default_title: self.default_title,
            pdf_engine,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_exact_lowercase_only() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert!("HTML".parse::<OutputFormat>().is_err());
        assert!("xml".parse::<OutputFormat>().is_err());
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn media_types_and_extensions_line_up() {
        assert_eq!(OutputFormat::Html.media_type(), "text/html");
        assert_eq!(OutputFormat::Pdf.media_type(), "application/pdf");
        assert_eq!(OutputFormat::Html.extension(), "html");
        assert_eq!(OutputFormat::Pdf.extension(), "pdf");
    }

    #[test]
    fn builder_rejects_empty_command() {
        let err = RenderConfig::builder().pdf_command("  ").build();
        assert!(matches!(err, Err(ConvertError::InvalidConfig(_))));
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let err = RenderConfig::builder().pdf_timeout_secs(0).build();
        assert!(matches!(err, Err(ConvertError::InvalidConfig(_))));
    }

    #[test]
    fn builder_defaults_are_usable() {
        let config = RenderConfig::builder().build().expect("default config");
        assert_eq!(config.default_title, DEFAULT_TITLE);
    }
}
