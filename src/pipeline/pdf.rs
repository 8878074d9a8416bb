//! External HTML-to-PDF engine seam.
//!
//! Layout and pagination are delegated to an external renderer, never
//! reimplemented. [`PdfEngine`] is the object-safe seam: HTML document
//! string in, PDF bytes out, one attempt, no retries. The default
//! implementation, [`CommandPdfEngine`], pipes the document into a
//! converter subprocess (`wkhtmltopdf` unless configured otherwise) on
//! stdin and reads the PDF from its stdout — no temp files, no shared
//! state, one process per request.
//!
//! stdin is written and stdout drained concurrently: a converter that
//! starts emitting output before consuming its whole input must not
//! deadlock against a full pipe.

use crate::error::ConvertError;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Converter binary used when none is configured.
pub const DEFAULT_PDF_COMMAND: &str = "wkhtmltopdf";

/// Wall-clock cap on one converter invocation.
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 60;

/// A black-box HTML-to-PDF renderer.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// Render a complete HTML document to PDF bytes.
    async fn render(&self, html: &str) -> Result<Vec<u8>, ConvertError>;
}

/// [`PdfEngine`] backed by an external converter subprocess.
pub struct CommandPdfEngine {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandPdfEngine {
    /// Engine invoking `command` with the stdin-to-stdout argument set
    /// wkhtmltopdf understands (`--quiet --encoding utf-8 - -`).
    pub fn new(command: impl Into<String>, timeout_secs: u64) -> Self {
        Self::with_args(
            command,
            ["--quiet", "--encoding", "utf-8", "-", "-"]
                .into_iter()
                .map(str::to_owned),
            timeout_secs,
        )
    }

    /// Engine with a custom argument list, for converters with a different
    /// CLI (e.g. `weasyprint - -`).
    pub fn with_args<I, S>(command: impl Into<String>, args: I, timeout_secs: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for CommandPdfEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PDF_COMMAND, DEFAULT_PDF_TIMEOUT_SECS)
    }
}

#[async_trait]
impl PdfEngine for CommandPdfEngine {
    async fn render(&self, html: &str) -> Result<Vec<u8>, ConvertError> {
        debug!(command = %self.command, html_bytes = html.len(), "spawning PDF engine");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConvertError::PdfEngineMissing {
                    command: self.command.clone(),
                },
                _ => ConvertError::PdfEngineFailed {
                    command: self.command.clone(),
                    detail: e.to_string(),
                },
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            ConvertError::Internal("PDF engine stdin was not captured".into())
        })?;

        let document = html.as_bytes().to_vec();
        let write = async move {
            stdin.write_all(&document).await?;
            stdin.shutdown().await?;
            // Dropping stdin closes the pipe; the converter sees EOF.
            drop(stdin);
            Ok::<(), std::io::Error>(())
        };

        let (write_result, output) = tokio::time::timeout(self.timeout, async {
            let (write_result, output) = tokio::join!(write, child.wait_with_output());
            (write_result, output)
        })
        .await
        .map_err(|_| ConvertError::PdfEngineTimeout {
            command: self.command.clone(),
            secs: self.timeout.as_secs(),
        })?;

        let output = output.map_err(|e| ConvertError::PdfEngineFailed {
            command: self.command.clone(),
            detail: e.to_string(),
        })?;

        if !output.status.success() {
            let detail = stderr_excerpt(&output.stderr, &output.status.to_string());
            warn!(command = %self.command, %detail, "PDF engine exited non-zero");
            return Err(ConvertError::PdfEngineFailed {
                command: self.command.clone(),
                detail,
            });
        }

        if output.stdout.is_empty() {
            return Err(ConvertError::PdfEngineFailed {
                command: self.command.clone(),
                detail: "converter produced no output".into(),
            });
        }

        // A successful exit with an unconsumed document means the converter
        // never read its input; the "PDF" cannot be trusted.
        write_result.map_err(|e| ConvertError::PdfEngineFailed {
            command: self.command.clone(),
            detail: format!("stdin write failed: {e}"),
        })?;

        debug!(command = %self.command, pdf_bytes = output.stdout.len(), "PDF engine finished");
        Ok(output.stdout)
    }
}

/// Last non-empty stderr line, truncated; falls back to the exit status.
fn stderr_excerpt(stderr: &[u8], status: &str) -> String {
    let text = String::from_utf8_lossy(stderr);
    let line = text
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or(status)
        .trim();
    if line.chars().count() > 200 {
        let cut: String = line.chars().take(199).collect();
        format!("{cut}…")
    } else {
        line.to_string()
    }
}
