//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the service:
//! configuration, error handling, logging and the HTTP server lifecycle.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::LogGuard;
pub use server::HttpServer;
