//! pkg-readme-server - npm package README, metadata and search tools
//!
//! Exposes three callable operations over HTTP, backed by the public npm
//! registry (with GitHub as a README fallback) and an in-memory response
//! cache with TTL expiration and LRU-on-overflow eviction.

mod api;
mod cache;
mod clients;
mod config;
mod error;
mod models;
mod readme;
mod tasks;
mod tools;
mod validate;

use std::net::SocketAddr;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;

/// Main entry point for the tool server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build upstream clients and the response cache (which starts its
///    background expiry sweep)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. On SIGINT/SIGTERM, shut down gracefully and destroy the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pkg_readme_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting pkg-readme-server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_max_bytes={}, default_ttl={:?}, search_ttl={:?}, sweep_interval={:?}",
        config.server_port,
        config.cache_max_bytes,
        config.cache_default_ttl,
        config.search_ttl,
        config.sweep_interval
    );

    let state = AppState::from_config(&config)?;
    let cache = state.cache.clone();
    info!("Response cache initialized");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stops the sweep task and drops all entries; safe if repeated.
    cache.destroy().await;
    info!("Server shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
