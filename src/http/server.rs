//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listen address: {0}")]
    Address(String),
}

/// Start the HTTP server based on configuration.
///
/// Installs the graceful shutdown handler and blocks until the server has
/// stopped.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config
        .socket_addr()
        .map_err(|e| ServerError::Address(e.to_string()))?;

    let handle = Handle::new();
    let timeout = Duration::from_secs(config.http.shutdown_timeout_seconds);

    shutdown::setup_shutdown_handler(handle.clone(), timeout);

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` shuts it down.
///
/// Binding port 0 picks an ephemeral port; `handle.listening()` resolves to the
/// address actually bound.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!(%addr, "HTTP server stopped");
    Ok(())
}
