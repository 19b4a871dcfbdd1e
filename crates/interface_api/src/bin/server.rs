//! Lava Zone Checker - API Server Binary
//!
//! This binary starts the HTTP API server for the lava zone checker.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! ARCGIS_API_KEY=... cargo run --bin lava-zone-api
//!
//! # Run with environment variables
//! LAVA_HOST=127.0.0.1 LAVA_PORT=3000 ARCGIS_API_KEY=... cargo run --bin lava-zone-api
//! ```
//!
//! # Environment Variables
//!
//! * `LAVA_HOST` - Server host (default: 0.0.0.0)
//! * `LAVA_PORT` - Server port (default: 8080)
//! * `LAVA_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `LAVA_GEOCODE_URL` - Geocoder `findAddressCandidates` URL
//! * `LAVA_ZONE_SERVICE_URL` - Hazard zone feature layer URL
//! * `LAVA_UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: transport default)
//! * `ARCGIS_API_KEY` - ArcGIS API key (lookups fail until it is set)

use anyhow::Context;
use interface_api::{config::ApiConfig, create_router, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Loads configuration, initializes logging, wires the ArcGIS adapters and
/// starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The upstream HTTP client cannot be built
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Lava Zone Checker API Server"
    );

    if !config.is_configured() {
        tracing::warn!("ARCGIS_API_KEY is not set; lookups will fail until it is configured");
    }

    let state = AppState::from_config(config.clone()).context("Failed to build upstream HTTP client")?;
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
