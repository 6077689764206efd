//! Termination signal handling

use anyhow::Result;
use tokio::signal;

use crate::infrastructure::config::ShutdownMode;

/// Resolve once Ctrl+C (or SIGTERM on unix) is received.
///
/// Fails only if a signal handler cannot be installed.
pub async fn termination_signal() -> Result<()> {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok::<(), std::io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<()>>();

    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("Received Ctrl+C signal");
        }
        result = terminate => {
            result?;
            tracing::info!("Received SIGTERM signal");
        }
    }
    Ok(())
}

/// Future passed to axum as the shutdown trigger.
///
/// In `Immediate` mode the process exits right here, so in-flight requests
/// are dropped and queued records are lost. In `Graceful` mode the future
/// resolves and axum drains open connections before `serve` returns.
pub async fn shutdown_signal(mode: ShutdownMode) {
    if let Err(e) = termination_signal().await {
        tracing::error!("Failed to listen for termination signal: {}", e);
        // Without a signal handler there is nothing to wait for; keep serving.
        std::future::pending::<()>().await;
    }

    match mode {
        ShutdownMode::Immediate => {
            tracing::info!("Shutdown signal received, exiting immediately");
            std::process::exit(0);
        }
        ShutdownMode::Graceful => {
            tracing::info!("Shutdown signal received, draining in-flight requests...");
        }
    }
}
