//! HTTP server lifecycle

use crate::api;
use crate::catalog::ProjectCatalog;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Serve `catalog` until Ctrl-C
///
/// # Errors
/// Returns an error if the address is invalid or cannot be bound.
pub async fn serve(config: &ProviderConfig, catalog: ProjectCatalog) -> Result<(), ProviderError> {
    let addr = config.socket_addr()?;
    let projects = catalog.len();
    let routes = api::routes(Arc::new(catalog));

    let (bound, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(addr, shutdown_signal())
        .map_err(|e| ProviderError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;

    tracing::info!(%bound, projects, "Mock PPM API listening");
    for endpoint in [
        "/api/health",
        "/api/projects",
        "/api/projects/<id>",
        "/api/portfolio/summary",
        "/api/portfolio/health",
    ] {
        tracing::info!("  GET http://{bound}{endpoint}");
    }

    server.await;
    tracing::info!("Mock PPM API stopped");
    Ok(())
}

/// Serve `catalog` on an ephemeral localhost port in the background
///
/// # Errors
/// Returns [`ProviderError::Bind`] if no port could be bound.
pub fn spawn_local(catalog: ProjectCatalog) -> Result<(SocketAddr, JoinHandle<()>), ProviderError> {
    let routes = api::routes(Arc::new(catalog));
    let (addr, server) = warp::serve(routes)
        .try_bind_ephemeral(([127, 0, 0, 1], 0))
        .map_err(|e| ProviderError::Bind {
            addr: "127.0.0.1:0".to_string(),
            reason: e.to_string(),
        })?;
    tracing::debug!(%addr, "Spawned local mock PPM API");
    Ok((addr, tokio::spawn(server)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
