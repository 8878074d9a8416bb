//! Bind-and-serve helper shared by both server binaries.

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `host:port` and serve the router until the process exits.
pub async fn serve(app: Router, host: &str, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
