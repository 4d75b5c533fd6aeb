//! Calculator Microservice Library
//!
//! A minimal HTTP service exposing addition, subtraction, multiplication and
//! division over query parameters, plus a health check.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, logging and the HTTP server
//! - **domains**: Business logic organized by bounded contexts
//!   - **calculator**: Operand validation, operation dispatch and routing
//!
//! # Example
//!
//! ```rust,no_run
//! use calculator_microservice::core::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     HttpServer::new(config).run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, HttpServer, Result};
