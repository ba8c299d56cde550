//! Mail delivery trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during mail delivery.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    InvalidAddress(String),
    #[error("Failed to build mail message: {0}")]
    Message(String),
    #[error("Mail transport error: {0}")]
    Transport(String),
    /// The SMTP server accepted the connection but refused the message.
    #[error("Mail rejected by server: {0}")]
    Rejected(String),
}

/// Result type for mail operations.
pub type MailResult<T> = Result<T, MailError>;

/// A single outgoing email, transport-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Sender address, e.g. `"Contact Form <contact@example.com>"`.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Optional `Reply-To` address.
    pub reply_to: Option<String>,
    pub subject: String,
    /// Rendered HTML body.
    pub html_body: String,
}

/// Provider-assigned identifier for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Opaque delivery identifier, when the transport produces one.
    pub id: Option<String>,
}

/// Trait for sending emails.
///
/// A single attempt per call: retry policy, if any, belongs to the transport
/// behind this trait, not to its callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::SmtpMailer`] - Production SMTP transport
/// - [`crate::infrastructure::mail::NullMailer`] - No-op implementation for
///   development and disabled delivery
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one email and returns the transport's delivery receipt.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] when the message cannot be built, the
    /// transport fails, or the server rejects the message.
    async fn send(&self, email: OutgoingEmail) -> MailResult<DeliveryReceipt>;

    /// Checks if the mail transport is reachable.
    ///
    /// Used by the health check endpoint to report transport status.
    async fn health_check(&self) -> bool;
}
