//! HTTP handlers for the calculator endpoints.
//!
//! Each operation request runs the same linear pipeline:
//! validate operands, dispatch the operation, then respond. The first failing
//! step short-circuits; its error is logged and turned into the response.

use axum::{
    Json,
    extract::RawQuery,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::any::Any;
use tracing::warn;

use super::error::CalculatorError;
use super::operands::Operands;
use super::operation::{Calculation, dispatch};

/// Body of the health check response.
pub const HEALTH_STATUS: &str = "Calculator microservice is running";

/// Health check endpoint. Ignores any query parameters.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": HEALTH_STATUS }))
}

/// Operation endpoint for the given identifier.
pub async fn calculate(identifier: &'static str, RawQuery(query): RawQuery) -> Response {
    match evaluate(identifier, query.as_deref()) {
        Ok(calculation) => Json(calculation).into_response(),
        Err(err) => {
            err.log();
            err.into_response()
        }
    }
}

/// Validate the query, then compute.
pub fn evaluate(identifier: &str, query: Option<&str>) -> Result<Calculation, CalculatorError> {
    let operands = Operands::from_query(query)?;
    dispatch(identifier, operands)
}

/// Fallback for paths no route matches.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    let message = format!("Cannot {} {}", method, uri.path());
    warn!("{}", message);
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

/// Turn a panic caught while handling a request into a generic 500.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };

    let err = CalculatorError::internal(detail);
    err.log();
    err.into_response()
}
