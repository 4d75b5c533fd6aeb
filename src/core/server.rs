//! HTTP server lifecycle.
//!
//! Binds the listener, mounts the calculator router and serves requests
//! until Ctrl-C is received.

use tracing::{info, warn};

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::calculator::build_router;

/// The calculator HTTP server.
pub struct HttpServer {
    config: Config,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.http.address()
    }

    /// Run the server.
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(self) -> Result<()> {
        let addr = self.address();
        let app = build_router(&self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        let cors_status = if self.config.http.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Calculator microservice running at http://{}:{} (CORS {})",
            display_host(&self.config.http.host),
            self.config.http.port,
            cors_status
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(())
    }
}

/// Hostname shown in the startup banner; wildcard binds are reachable via localhost.
fn display_host(host: &str) -> &str {
    match host {
        "0.0.0.0" | "::" | "[::]" => "localhost",
        other => other,
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
