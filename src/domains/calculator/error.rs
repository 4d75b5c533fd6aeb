//! Calculator-specific error types.
//!
//! Every failure carries two texts: the `Display` output, which is the
//! server-side detail written to the logs, and [`CalculatorError::client_message`],
//! which is the only text ever returned to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Message returned when an operand is missing or not a number.
pub const INVALID_OPERANDS: &str = "Both num1 and num2 must be valid numbers";

/// Message returned when dividing by zero.
pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed";

/// Message returned for faults nothing else classified.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Errors that can occur while handling a calculator request.
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// One or both operands failed numeric parsing.
    #[error("{}", INVALID_OPERANDS)]
    InvalidOperands,

    /// The divisor of a division was zero.
    #[error("{}", DIVISION_BY_ZERO)]
    DivisionByZero,

    /// The operation identifier is not one the dispatcher knows.
    #[error("{} Error: Invalid operation", .0.to_uppercase())]
    UnknownOperation(String),

    /// The arithmetic itself failed.
    #[error("{} Error: {reason}", .operation.to_uppercase())]
    Computation { operation: String, reason: String },

    /// A fault outside the operation pipeline.
    #[error("Unhandled error: {0}")]
    Internal(String),
}

impl CalculatorError {
    /// Create a new "computation" error.
    pub fn computation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Computation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidOperands | Self::DivisionByZero => StatusCode::BAD_REQUEST,
            Self::UnknownOperation(_) | Self::Computation { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidOperands => INVALID_OPERANDS.to_string(),
            Self::DivisionByZero => DIVISION_BY_ZERO.to_string(),
            Self::UnknownOperation(operation) | Self::Computation { operation, .. } => {
                format!("Error during {}", operation)
            }
            Self::Internal(_) => UNEXPECTED_ERROR.to_string(),
        }
    }

    /// Record the server-side detail at error level.
    pub fn log(&self) {
        error!("{}", self);
    }
}

impl IntoResponse for CalculatorError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({ "error": self.client_message() })),
        )
            .into_response()
    }
}
