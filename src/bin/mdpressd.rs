//! Markdown converter service binary.
//!
//! A thin shim over the library crate: CLI flags map to `RenderConfig`,
//! the router does the rest. PDF output needs an HTML-to-PDF converter on
//! PATH (wkhtmltopdf by default); HTML output has no external dependency.

use anyhow::{Context, Result};
use clap::Parser;
use docpress::RenderConfig;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve on the default port (PDF via wkhtmltopdf on PATH)
  mdpressd

  # Use weasyprint as the PDF engine
  mdpressd --pdf-command weasyprint --pdf-args '-,-'

  # Convert pasted markdown to HTML from the command line
  curl -s localhost:8000/convert/paste \
    --data-urlencode 'content=# Hello' \
    --data-urlencode 'output_format=html' \
    --data-urlencode 'title=Greeting' -o Greeting.html

ENVIRONMENT VARIABLES:
  MDPRESSD_HOST         Bind address (default 0.0.0.0)
  MDPRESSD_PORT         Port (default 8000)
  MDPRESSD_API_ONLY     Disable the embedded test UI
  MDPRESSD_PDF_COMMAND  HTML-to-PDF converter binary (default wkhtmltopdf)
  MDPRESSD_PDF_ARGS     Comma-separated converter arguments
  MDPRESSD_PDF_TIMEOUT  Converter wall-clock cap in seconds (default 60)
  RUST_LOG              Override the log filter
"#;

/// Convert Markdown to HTML or PDF over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "mdpressd",
    version,
    about = "Markdown to HTML/PDF converter HTTP service",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Bind address.
    #[arg(long, env = "MDPRESSD_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, env = "MDPRESSD_PORT", default_value_t = 8000)]
    port: u16,

    /// Serve the API without the embedded test page at `/`.
    #[arg(long, env = "MDPRESSD_API_ONLY")]
    api_only: bool,

    /// HTML-to-PDF converter binary.
    #[arg(long, env = "MDPRESSD_PDF_COMMAND", default_value = "wkhtmltopdf")]
    pdf_command: String,

    /// Comma-separated arguments for the converter binary.
    /// Default: `--quiet,--encoding,utf-8,-,-`.
    #[arg(long, env = "MDPRESSD_PDF_ARGS", value_delimiter = ',')]
    pdf_args: Option<Vec<String>>,

    /// Wall-clock cap on one converter run, in seconds.
    #[arg(long, env = "MDPRESSD_PDF_TIMEOUT", default_value_t = 60)]
    pdf_timeout: u64,

    /// Enable DEBUG-level logs.
    #[arg(short, long, env = "MDPRESSD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MDPRESSD_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut builder = RenderConfig::builder()
        .pdf_command(cli.pdf_command.clone())
        .pdf_timeout_secs(cli.pdf_timeout);
    if let Some(ref args) = cli.pdf_args {
        builder = builder.pdf_args(args.iter().cloned());
    }
    let config = builder.build().context("invalid configuration")?;

    let app = docpress::convert_router(Arc::new(config), !cli.api_only);
    docpress::serve(app, &cli.host, cli.port)
        .await
        .context("server error")
}
