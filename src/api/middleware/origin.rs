//! Origin allow-list middleware.
//!
//! A lightweight cross-origin submission guard: requests declaring an
//! `Origin` outside the configured allow-list are rejected before the body
//! is parsed or validated.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Rejects requests whose declared origin is not on the allow-list.
///
/// # Behavior
///
/// - Allow-list empty: check disabled, every request passes.
/// - `Origin` header absent: request passes. Non-browser clients (curl,
///   server-to-server) do not declare an origin.
/// - `Origin` present but not allow-listed: `403 Forbidden`, nothing further
///   runs for the request.
///
/// Trailing slashes are ignored on both sides of the comparison.
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if state.allowed_origins.is_empty() {
        return Ok(next.run(req).await);
    }

    if let Some(value) = req.headers().get(header::ORIGIN) {
        let origin = value
            .to_str()
            .map_err(|_| AppError::forbidden("Origin not allowed"))?
            .trim_end_matches('/');

        if !state.allowed_origins.iter().any(|allowed| allowed == origin) {
            tracing::warn!(origin, "Rejected submission from disallowed origin");
            return Err(AppError::forbidden("Origin not allowed"));
        }
    }

    Ok(next.run(req).await)
}
