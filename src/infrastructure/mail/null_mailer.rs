//! No-op mailer implementation for development or disabled delivery.

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::mailer::{DeliveryReceipt, MailResult, Mailer, OutgoingEmail};

/// A mailer that accepts every message without delivering it.
///
/// Used when no SMTP transport is configured. Submissions are logged so
/// local development still shows what would have been sent.
///
/// # Use Cases
///
/// - Development environments without an SMTP server
/// - Testing scenarios where delivery should be bypassed
pub struct NullMailer;

impl NullMailer {
    /// Creates a new NullMailer instance.
    pub fn new() -> Self {
        debug!("Using NullMailer (mail delivery disabled)");
        Self
    }
}

impl Default for NullMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, email: OutgoingEmail) -> MailResult<DeliveryReceipt> {
        let id = format!("{}@contact-relay", Uuid::new_v4());
        info!(to = %email.to, subject = %email.subject, id = %id, "Mail delivery skipped (NullMailer)");

        Ok(DeliveryReceipt { id: Some(id) })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
