use std::sync::Arc;

use tokio::net::TcpListener;

use gpio_relay_service::{
    log_info,
    server::{self, shutdown_signal},
    util::log,
    RelayConfig, RelayCoordinator,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let config = RelayConfig::from_env()?;
    log_info!(
        "🚀 Configuration: pin={}, active_high={}, enabled={}, backend={}",
        config.relay_pin,
        config.active_high,
        config.gpio_enabled,
        config.backend.as_str()
    );

    let relay = Arc::new(RelayCoordinator::from_config(&config));

    let result = run(&config, relay.clone()).await;

    // Already done on a signal; covers the bind and serve failure paths.
    relay.shutdown().await;
    result
}

async fn run(config: &RelayConfig, relay: Arc<RelayCoordinator>) -> color_eyre::Result<()> {
    let listener = TcpListener::bind(config.listen_addr()).await?;
    log_info!("🚀 Starting GPIO service on {}", listener.local_addr()?);

    server::serve_until(listener, relay, shutdown_signal(), server::DRAIN_TIMEOUT).await?;
    log_info!("🛑 HTTP server stopped");
    Ok(())
}
