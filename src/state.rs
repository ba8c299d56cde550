//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ContactService;
use crate::domain::mailer::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    /// Mail transport handle, shared with the contact service. Kept here so
    /// the health check can probe it directly.
    pub mailer: Arc<dyn Mailer>,
    /// Origins allowed to submit the contact form. Empty disables the check.
    pub allowed_origins: Arc<Vec<String>>,
    /// When true, the client IP is read from forwarding headers.
    pub behind_proxy: bool,
}
