//! HTTP route table.
//!
//! All API routes live under a version prefix. The health route never caches:
//! liveness probes must always reach the process. Requests to unknown paths or
//! with unsupported methods are answered by axum's defaults (404 / 405).
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{API_PREFIX, CACHE_CONTROL_HEALTH, HEALTH_ROUTE};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and response headers.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_ROUTE, get(health::get_health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .nest(API_PREFIX, health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
