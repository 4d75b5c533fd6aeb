//! Configuration management for the calculator service.
//!
//! This module provides a centralized configuration structure populated from
//! defaults and environment variables (optionally read from a `.env` file).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Default port the service listens on.
pub const DEFAULT_PORT: u16 = 3050;

/// Main configuration structure for the calculator service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service identification.
    pub service: ServiceConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Service identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Static tag attached to every log record.
    pub name: String,

    /// The version of the service.
    pub version: String,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Enable permissive CORS for browser clients.
    pub enable_cors: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Directory holding `error.log` and `combined.log`.
    pub directory: PathBuf,

    /// Whether records are also written to the console.
    pub console: bool,
}

impl HttpConfig {
    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            enable_cors: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: PathBuf::from("logs"),
            console: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "calculator-microservice".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `CALC_`.
    /// For example: `CALC_PORT`, `CALC_LOG_LEVEL`.
    ///
    /// Runs before the logger exists, so warnings emitted here only reach a
    /// subscriber if one was installed earlier.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("CALC_SERVICE_NAME") {
            config.service.name = name;
        }

        if let Ok(host) = std::env::var("CALC_HOST") {
            config.http.host = host;
        }

        if let Ok(port) = std::env::var("CALC_PORT") {
            match port.parse() {
                Ok(port) => config.http.port = port,
                Err(_) => warn!("Ignoring invalid CALC_PORT '{}', using {}", port, DEFAULT_PORT),
            }
        }

        if let Ok(cors) = std::env::var("CALC_ENABLE_CORS") {
            config.http.enable_cors = parse_flag(&cors);
        }

        if let Ok(level) = std::env::var("CALC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(directory) = std::env::var("CALC_LOG_DIR") {
            config.logging.directory = PathBuf::from(directory);
        }

        if let Ok(console) = std::env::var("CALC_LOG_CONSOLE") {
            config.logging.console = parse_flag(&console);
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0"
}
