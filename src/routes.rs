//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /contact` - Contact form submission (origin-checked)
//! - `GET  /health`  - Health check: mail transport, version
//!
//! Non-POST methods on `/contact` receive `405` with an `Allow: POST` header.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Origin check** - Allow-list guard, runs before body parsing
//! - **Catch panic** - Converts any panic into a generic 500 envelope
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{contact_handler, health_handler};
use crate::api::middleware::{origin, tracing};
use crate::state::AppState;
use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The origin check is attached as a route layer on `/contact` only: the
/// health endpoint stays reachable for probes regardless of origin
/// configuration.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let contact_routes = Router::new()
        .route("/contact", post(contact_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), origin::layer));

    let router = Router::new()
        .merge(contact_routes)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
        .layer(CatchPanicLayer::custom(handle_panic));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Boundary conversion for anything unexpected: the caller gets a generic
/// envelope, the panic detail stays in the server log.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(|s| s.as_str())
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ::tracing::error!(detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "An unexpected error occurred. Please try again later."
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payload_becomes_generic_500() {
        let response = handle_panic(Box::new("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new("static boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
