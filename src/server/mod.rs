// src/server/mod.rs

//! HTTP surface: thin JSON handlers over the relay coordinator

mod handlers;
mod shutdown_signal;

use std::{future::Future, sync::Arc, time::Duration};

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, sync::oneshot};

use crate::{error::Result, log_info, log_warn, relay::RelayCoordinator};

pub use shutdown_signal::shutdown_signal;

pub type AppState = Arc<RelayCoordinator>;

/// How long open connections may keep the server alive after a stop signal
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

pub fn router(relay: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/relay/on", post(handlers::relay_on))
        .route("/relay/off", post(handlers::relay_off))
        .route("/relay/blink", post(handlers::relay_blink))
        .route("/relay/status", get(handlers::relay_status))
        .with_state(relay)
}

/// Serve until `shutdown` resolves, then drain connections without a limit.
pub async fn serve<F>(listener: TcpListener, relay: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(relay))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Serve until `signal` resolves. The relay is forced OFF as soon as the
/// signal arrives, before connections drain; draining is cut off after `drain`.
pub async fn serve_until<F>(listener: TcpListener, relay: AppState, signal: F, drain: Duration) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stopping_tx, stopping_rx) = oneshot::channel();

    let shutdown = {
        let relay = relay.clone();
        async move {
            signal.await;
            relay.shutdown().await;
            log_info!("🛑 Draining HTTP connections");
            let _ = stopping_tx.send(());
        }
    };

    tokio::select! {
        result = serve(listener, relay, shutdown) => result,
        _ = drain_deadline(stopping_rx, drain) => {
            log_warn!("Connections still open {:?} after stop signal, exiting anyway", drain);
            Ok(())
        }
    }
}

async fn drain_deadline(stopping: oneshot::Receiver<()>, drain: Duration) {
    match stopping.await {
        Ok(()) => tokio::time::sleep(drain).await,
        Err(_) => std::future::pending().await,
    }
}
