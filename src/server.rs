//! HTTP server initialization and runtime setup.
//!
//! Handles mail transport setup, state wiring, and Axum server lifecycle.

use crate::application::services::{ContactService, SenderConfig};
use crate::config::Config;
use crate::domain::mailer::Mailer;
use crate::infrastructure::mail::{NullMailer, SmtpMailer};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SMTP mail transport (or NullMailer fallback)
/// - Contact delivery service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The configured SMTP URL cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mailer: Arc<dyn Mailer> = if let Some(smtp_url) = &config.smtp_url {
        let smtp = SmtpMailer::connect(smtp_url).await?;
        tracing::info!("Mail delivery enabled (SMTP)");
        Arc::new(smtp)
    } else {
        tracing::warn!("Mail delivery disabled (NullMailer): submissions are accepted but not sent");
        Arc::new(NullMailer::new())
    };

    let contact_service = Arc::new(ContactService::new(
        mailer.clone(),
        SenderConfig {
            admin_recipient: config.admin_recipient.clone(),
            admin_from: config.admin_from.clone(),
            no_reply_from: config.no_reply_from.clone(),
            site_name: config.site_name.clone(),
        },
    ));

    let state = AppState {
        contact_service,
        mailer,
        allowed_origins: Arc::new(config.allowed_origins.clone()),
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
