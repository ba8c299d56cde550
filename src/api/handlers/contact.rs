//! Handler for the contact form endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, FromRequestParts, State, rejection::JsonRejection},
    http::request::Parts,
    http::{HeaderMap, header},
};
use chrono::Utc;
use std::convert::Infallible;
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::domain::submission::SubmissionMetadata;
use crate::error::AppError;
use crate::state::AppState;

/// Extractor gathering transport-level submission metadata.
///
/// Collected here once so the dispatcher never touches request headers.
/// The client IP comes from forwarding headers when the service is
/// configured as running behind a trusted proxy, otherwise from the peer
/// socket address.
pub struct ClientMeta(pub SubmissionMetadata);

impl FromRequestParts<AppState> for ClientMeta {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ip = client_ip(parts, state.behind_proxy);

        let user_agent = header_str(&parts.headers, header::USER_AGENT.as_str())
            .unwrap_or("unknown")
            .to_string();

        let referer = header_str(&parts.headers, header::REFERER.as_str())
            .unwrap_or("direct")
            .to_string();

        Ok(Self(SubmissionMetadata {
            ip,
            user_agent,
            referer,
            timestamp: Utc::now(),
        }))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn client_ip(parts: &Parts, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = header_str(&parts.headers, "x-forwarded-for")
            && let Some(first) = forwarded.split(',').next()
            && !first.trim().is_empty()
        {
            return first.trim().to_string();
        }

        if let Some(real_ip) = header_str(&parts.headers, "x-real-ip") {
            return real_ip.trim().to_string();
        }
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Accepts a contact form submission and delivers the notifications.
///
/// # Endpoint
///
/// `POST /contact`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Doe",
///   "email": "jane@example.com",
///   "message": "Hello, I would like to talk about a project.",
///   "website": ""
/// }
/// ```
///
/// # Pipeline
///
/// 1. Origin check (middleware, before this handler runs)
/// 2. Body parse - malformed JSON is a 400 distinct from field validation
/// 3. Normalization (trim, lowercase email) and honeypot check - a filled
///    `website` field returns a success-shaped response without dispatching,
///    so bots cannot tell they were detected
/// 4. Field validation - all violations accumulated, keyed by wire name
/// 5. Dispatch - admin notification mandatory, submitter receipt best-effort
///
/// # Errors
///
/// - `400` - malformed body or field validation failure (with `errors` map)
/// - `403` - origin not allowed (from middleware)
/// - `502` - admin notification could not be delivered
pub async fn contact_handler(
    State(state): State<AppState>,
    ClientMeta(metadata): ClientMeta,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected malformed contact body");
        AppError::bad_request("Request body must be a JSON object")
    })?;

    let request = request.normalized();

    if request.is_bot() {
        tracing::info!(ip = %metadata.ip, "Honeypot triggered, skipping dispatch");
        return Ok(Json(ContactResponse::accepted(None)));
    }

    request.validate()?;

    let submission = request.into_submission();
    let result = state.contact_service.dispatch(&submission, &metadata).await?;

    Ok(Json(ContactResponse::accepted(result.delivery_id)))
}
