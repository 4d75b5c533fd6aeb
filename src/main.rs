//! Calculator Microservice Entry Point
//!
//! Loads configuration, initializes logging and serves the HTTP API.

use anyhow::Result;
use tracing::{Instrument, error, info};

use calculator_microservice::core::{Config, HttpServer, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Held until exit so buffered records reach the log files
    let _log_guard = logging::init(&config.logging)?;

    let span = logging::service_span(&config.service.name);
    span.in_scope(|| info!("Starting {} v{}", config.service.name, config.service.version));

    if let Err(e) = HttpServer::new(config).run().instrument(span.clone()).await {
        span.in_scope(|| error!("Server error: {}", e));
        return Err(e.into());
    }

    span.in_scope(|| info!("Server shutting down"));

    Ok(())
}
