//! Route table for the calculator service.

use axum::{
    Router,
    body::Body,
    extract::RawQuery,
    http::Request,
    routing::get,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info_span;

use super::handlers::{calculate, handle_panic, health_check, not_found};
use crate::core::config::Config;

/// Operation identifiers exposed as `GET /<identifier>`.
pub const OPERATION_ENDPOINTS: [&str; 4] = ["add", "subtract", "multiply", "divide"];

/// Build the application router.
///
/// Every path also answers with a trailing slash (`/add/`, `/health/`).
pub fn build_router(config: &Config) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/health/", get(health_check));

    for identifier in OPERATION_ENDPOINTS {
        let handler = get(move |query: RawQuery| calculate(identifier, query));
        router = router
            .route(&format!("/{}", identifier), handler.clone())
            .route(&format!("/{}/", identifier), handler);
    }

    with_middleware(router.fallback(not_found), config)
}

/// Wrap routes with the fallback error handler, request tracing and CORS.
fn with_middleware(router: Router, config: &Config) -> Router {
    let service: Arc<str> = Arc::from(config.service.name.as_str());

    let trace = TraceLayer::new_for_http()
        .make_span_with(move |request: &Request<Body>| {
            info_span!(
                "request",
                service = %service,
                method = %request.method(),
                uri = %request.uri()
            )
        })
        .on_failure(());

    let router = router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace);

    if config.http.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}
