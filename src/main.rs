//! InvisibleQueue - bounded in-memory user queue served over HTTP
//!
//! Producers POST user records to `/add-user`, a consumer pulls them one at a
//! time from `/get-user`, and `/healthz` and `/metrics` report liveness and
//! queue depth. The queue lives in memory only and never blocks a request.

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::shutdown::shutdown_signal;
use crate::infrastructure::state::AppState;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invisible_queue=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting InvisibleQueue service");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Queue capacity: {}", config.queue_capacity);
    tracing::info!("  Worker threads: {}", config.worker_threads);
    tracing::info!("  Shutdown mode: {:?}", config.shutdown_mode);

    // Fixed-size worker pool serving all connections
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config));
    let addr = state.config.socket_addr();
    let shutdown_mode = state.config.shutdown_mode;
    let app = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_mode))
        .await
        .context("Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}
