//! health-api: a liveness probe endpoint.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration from a TOML file, initializes tracing, builds the Axum router
//! and runs the HTTP server until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use health_api::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER, HEALTH_PATH};
use health_api::http::start_server;
use health_api::{create_router, AppError};

/// health-api: answers liveness probes on GET /api/v1/health
#[derive(Parser, Debug)]
#[command(name = "health-api", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "health_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override http.host from the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Override http.port from the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(filter: &str, format: LogFormat) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::Logging(e.to_string()))?;
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    }
    .map_err(|e| AppError::Logging(e.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration first: it decides the log format
    let config = AppConfig::load_or_default(args.config.as_deref())?
        .with_overrides(args.host, args.port)?;

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let log_format = config.logging.log_format()?;
    init_tracing(&log_filter, log_format)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = log_format.as_str(),
        shutdown_timeout_secs = config.http.shutdown_timeout_seconds,
        "Loaded configuration"
    );

    let app = create_router();
    tracing::info!(path = HEALTH_PATH, "Health endpoint registered");

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
