//! Error types for service startup and lifecycle.
//!
//! Request-level failures live in the calculator domain; this enum covers
//! what can go wrong while bringing the process up or serving connections.

use thiserror::Error;

/// A specialized Result type for service lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the service process.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to bind the HTTP listener.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP server stopped with an error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The logging subsystem could not be set up.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a logging error.
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::bind("0.0.0.0:3050", source);
        let msg = err.to_string();
        assert!(msg.contains("0.0.0.0:3050"));
        assert!(msg.contains("address in use"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
