//! FreteBridge web server - Yampi to Jadlog webhook middleware.
//!
//! This binary provides a thin web server that:
//! - Receives order and quote webhooks from Yampi
//! - Verifies the HMAC signature over the raw body
//! - Maps the payload into the Jadlog schema and forwards it
//! - Relays the carrier's response back to the caller

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fretebridge::{web, AppState, Config, JadlogClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("web_server_starting");

    // Load configuration; invalid numeric codes abort here, never per request
    let config = Config::from_env().context("Invalid configuration")?;
    info!(
        port = config.port,
        modalidade = config.modalidade,
        tipo_frete = config.tipo_frete,
        yampi_secret_configured = config.yampi_secret.is_some(),
        jadlog_base_url = %config.jadlog_base_url,
        "config_loaded"
    );

    let jadlog = JadlogClient::new(&config).context("Failed to build Jadlog client")?;

    let port = config.port;
    let state = AppState::new(config, jadlog);

    let app = web::app(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "web_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("web_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
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
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
