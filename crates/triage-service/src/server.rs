//! Listener setup and graceful shutdown.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{info, warn};

use triage_contracts::error::{TriageError, TriageOutcome};

use crate::{
    config::ServiceConfig,
    router::{router, AppState},
};

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> TriageOutcome<()> {
    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| TriageError::ConfigError {
            reason: format!("failed to bind {}: {}", config.bind, e),
        })?;
    let state = AppState::new(config.load_engine()?, config.processing_delay());
    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> TriageOutcome<()> {
    let addr = listener.local_addr().map_err(|e| TriageError::Transport {
        reason: format!("failed to read listener address: {e}"),
    })?;
    info!(%addr, delay_ms = state.processing_delay.as_millis() as u64, "triage service listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| TriageError::Transport {
            reason: format!("server error: {e}"),
        })?;

    info!("triage service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c; shutting down");
    }
}
