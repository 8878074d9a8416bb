//! JSON formatter service binary.
//!
//! A thin shim over the library crate: CLI flags in, one axum router out.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve on the default port
  jsonfmtd

  # Bind somewhere specific, API only (no embedded test page)
  jsonfmtd --host 127.0.0.1 --port 9000 --api-only

  # Format a document from the command line
  curl -s localhost:8000/api/format \
    -H 'Content-Type: application/json' \
    -d '{"text": "{'\''a'\'': 1}", "indent": 2}'

ENVIRONMENT VARIABLES:
  JSONFMTD_HOST      Bind address (default 0.0.0.0)
  JSONFMTD_PORT      Port (default 8000)
  JSONFMTD_API_ONLY  Disable the embedded test UI
  RUST_LOG           Override the log filter
"#;

/// Format and validate JSON over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "jsonfmtd",
    version,
    about = "JSON formatter & validator HTTP service",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Bind address.
    #[arg(long, env = "JSONFMTD_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, env = "JSONFMTD_PORT", default_value_t = 8000)]
    port: u16,

    /// Serve the API without the embedded test page at `/`.
    #[arg(long, env = "JSONFMTD_API_ONLY")]
    api_only: bool,

    /// Enable DEBUG-level logs.
    #[arg(short, long, env = "JSONFMTD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "JSONFMTD_QUIET")]
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

    let app = docpress::format_router(!cli.api_only);
    docpress::serve(app, &cli.host, cli.port)
        .await
        .context("server error")
}
