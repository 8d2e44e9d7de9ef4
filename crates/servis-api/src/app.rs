//! Server bootstrap: stores, state, router, listener.

use std::sync::Arc;

use servis_core::config::{AppConfig, DatabaseProvider};
use servis_core::error::AppError;
use servis_database::{DatabasePool, MemoryStore};
use tracing::{error, info, warn};

use crate::router::build_router;
use crate::state::{AppState, Stores};

/// Runs the Servis HTTP server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let (stores, pool) = match config.database.provider {
        DatabaseProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            (Stores::postgres(&pool), Some(pool))
        }
        DatabaseProvider::Memory => {
            warn!("Using the in-memory store; data is lost on exit");
            (Stores::memory(Arc::new(MemoryStore::new())), None)
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState::new(config, stores));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "Servis server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    info!("Servis server stopped");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
