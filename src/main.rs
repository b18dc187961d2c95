//! Sentiment Analysis API
//!
//! This is the main entry point for the API server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::{net::lookup_host, signal};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sentiment_api::{routes, telemetry, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Configuration comes first: it decides the log level and format
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    info!(host = %config.host, port = config.port, "Starting Sentiment Analysis API");

    // Initialize metrics
    telemetry::init_metrics();

    // Initialize application state
    let state = Arc::new(AppState::new(config.clone())?);
    info!(model = %config.llm_model, "Application state initialized");

    // Build the router
    let app = routes::create_router(state);

    // SERVER_HOST may be a name such as "localhost"
    let addr: SocketAddr = lookup_host((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to resolve {}:{}", config.host, config.port))?
        .next()
        .with_context(|| format!("No address for {}:{}", config.host, config.port))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %addr, error = %e, "Failed to start server");
            return Err(e.into());
        }
    };
    info!(address = %addr, "Server starting");

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Sentiment Analysis API shutdown complete");
    Ok(())
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `LOG_LEVEL` when set.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match config.log_level.as_str() {
            "debug" | "info" | "warn" | "error" => config.log_level.as_str(),
            _ => "info",
        };
        format!("sentiment_api={level},tower_http={level}").into()
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.with_thread_ids(true).init();
    }
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating shutdown");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating shutdown");
        }
    }
}
