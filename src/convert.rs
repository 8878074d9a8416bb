//! Conversion entry points for the Renderer.
//!
//! [`convert`] is the whole contract: markdown + output format + title in,
//! one [`RenderedDocument`] out. Validation happens before any engine work,
//! and no partial output is ever returned on failure — a request either
//! yields a complete document or a [`ConvertError`].

use crate::config::{OutputFormat, RenderConfig};
use crate::error::ConvertError;
use crate::output::RenderedDocument;
use crate::pipeline::{markdown, template};
use tracing::debug;

/// Convert markdown text to a downloadable HTML or PDF document.
///
/// # Steps
/// 1. Reject empty/whitespace-only content.
/// 2. Transform markdown to an HTML fragment.
/// 3. Wrap the fragment in the fixed document template (timestamp is
///    stamped during this step).
/// 4. For HTML, return the document as UTF-8 bytes; for PDF, pipe it
///    through the configured [`crate::pipeline::pdf::PdfEngine`].
///
/// # Errors
/// [`ConvertError::EmptyContent`] for blank input; engine variants when the
/// external PDF renderer is missing, fails, or times out.
pub async fn convert(
    markdown_text: &str,
    format: OutputFormat,
    title: &str,
    config: &RenderConfig,
) -> Result<RenderedDocument, ConvertError> {
    if markdown_text.trim().is_empty() {
        return Err(ConvertError::EmptyContent);
    }

    let fragment = markdown::to_fragment(markdown_text);
    let document = template::wrap_document(title, &fragment);
    let filename = template::attachment_filename(title, format.extension());

    let bytes = match format {
        OutputFormat::Html => document.into_bytes(),
        OutputFormat::Pdf => config.pdf_engine.render(&document).await?,
    };

    debug!(
        format = format.extension(),
        %title,
        bytes = bytes.len(),
        "conversion complete"
    );

    Ok(RenderedDocument {
        bytes,
        media_type: format.media_type(),
        filename,
    })
}

/// Derive a document title from an uploaded filename.
///
/// The extension-stripped base name becomes the title; when no usable
/// filename is present the configured default applies. `"archive.tar.gz"`
/// yields `"archive.tar"`, and dot-files like `".md"` keep their full name,
/// matching how path stems behave.
pub fn title_from_filename(filename: Option<&str>, default_title: &str) -> String {
    filename
        .and_then(|name| std::path::Path::new(name).file_stem())
        .and_then(|stem| stem.to_str())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| default_title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TITLE;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    #[tokio::test]
    async fn html_output_contains_heading_and_title() {
        let doc = convert("# Title", OutputFormat::Html, "My Doc", &config())
            .await
            .expect("html conversion must succeed");

        assert_eq!(doc.media_type, "text/html");
        assert_eq!(doc.filename, "My_Doc.html");

        let body = String::from_utf8(doc.bytes).unwrap();
        assert!(body.contains("<h1"), "got: {body}");
        assert!(body.contains("<title>My Doc</title>"), "got: {body}");
    }

    #[tokio::test]
    async fn empty_content_is_rejected_before_any_rendering() {
        let err = convert("", OutputFormat::Html, "T", &config())
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::EmptyContent));

        let err = convert("   \n\t ", OutputFormat::Pdf, "T", &config())
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::EmptyContent));
    }

    #[test]
    fn title_derivation_strips_the_extension() {
        assert_eq!(
            title_from_filename(Some("notes.md"), DEFAULT_TITLE),
            "notes"
        );
        assert_eq!(
            title_from_filename(Some("trip report.markdown"), DEFAULT_TITLE),
            "trip report"
        );
        assert_eq!(
            title_from_filename(Some("archive.tar.gz"), DEFAULT_TITLE),
            "archive.tar"
        );
    }

    #[test]
    fn title_derivation_falls_back_to_default() {
        assert_eq!(title_from_filename(None, DEFAULT_TITLE), "Document");
        assert_eq!(title_from_filename(Some(""), DEFAULT_TITLE), "Document");
        assert_eq!(title_from_filename(Some("   "), "Fallback"), "Fallback");
    }

    #[test]
    fn dot_files_keep_their_name() {
        assert_eq!(title_from_filename(Some(".md"), DEFAULT_TITLE), ".md");
    }
}
