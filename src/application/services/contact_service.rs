//! Contact submission delivery service.

use std::sync::Arc;

use askama::Template;

use crate::application::templates::{AdminNotificationTemplate, UserReceiptTemplate, summarize};
use crate::domain::mailer::{Mailer, OutgoingEmail};
use crate::domain::submission::{Submission, SubmissionMetadata};
use crate::error::AppError;

/// Outcome of the two-step delivery for one accepted submission.
///
/// Constructed once per dispatch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub admin_delivered: bool,
    pub user_receipt_delivered: bool,
    /// Transport-assigned identifier of the admin notification.
    pub delivery_id: Option<String>,
}

/// Sender and recipient addresses used for outgoing notifications.
#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// Admin mailbox that receives contact notifications.
    pub admin_recipient: String,
    /// `From` address for admin notifications.
    pub admin_from: String,
    /// `From` address for submitter receipts.
    pub no_reply_from: String,
    /// Display name used in subjects and template bodies.
    pub site_name: String,
}

/// Service delivering contact notifications through an injected [`Mailer`].
///
/// # Delivery Contract
///
/// Two sequential sends per submission, one attempt each:
///
/// 1. Admin notification (mandatory). A failure here aborts the dispatch
///    and fails the whole request.
/// 2. Submitter receipt (best-effort). A failure here is logged, but the
///    dispatch still succeeds because the admin was already notified.
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    senders: SenderConfig,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(mailer: Arc<dyn Mailer>, senders: SenderConfig) -> Self {
        Self { mailer, senders }
    }

    /// Delivers the admin notification and submitter receipt for a validated
    /// submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeliveryFailed`] when the admin notification
    /// cannot be delivered. The caller-facing message stays generic; the
    /// transport error is logged server-side only.
    pub async fn dispatch(
        &self,
        submission: &Submission,
        metadata: &SubmissionMetadata,
    ) -> Result<DispatchResult, AppError> {
        let admin_email = self.build_admin_notification(submission, metadata)?;

        let receipt = match self.mailer.send(admin_email).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::error!(error = %e, from = %submission.email, "Admin notification delivery failed");
                return Err(AppError::delivery_failed(
                    "Failed to deliver your message. Please try again later.",
                ));
            }
        };

        tracing::info!(
            id = receipt.id.as_deref().unwrap_or("-"),
            from = %submission.email,
            "Admin notification delivered"
        );

        let user_receipt_delivered = self.send_user_receipt(submission).await;

        Ok(DispatchResult {
            admin_delivered: true,
            user_receipt_delivered,
            delivery_id: receipt.id,
        })
    }

    /// Sends the best-effort receipt. Never fails the dispatch.
    async fn send_user_receipt(&self, submission: &Submission) -> bool {
        let email = match self.build_user_receipt(submission) {
            Ok(email) => email,
            Err(e) => {
                tracing::warn!(error = %e, to = %submission.email, "User receipt could not be rendered");
                return false;
            }
        };

        match self.mailer.send(email).await {
            Ok(receipt) => {
                tracing::info!(
                    id = receipt.id.as_deref().unwrap_or("-"),
                    to = %submission.email,
                    "User receipt delivered"
                );
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, to = %submission.email, "User receipt delivery failed");
                false
            }
        }
    }

    fn build_admin_notification(
        &self,
        submission: &Submission,
        metadata: &SubmissionMetadata,
    ) -> Result<OutgoingEmail, AppError> {
        let body = AdminNotificationTemplate {
            first_name: &submission.first_name,
            last_name: &submission.last_name,
            email: &submission.email,
            message: &submission.message,
            ip: &metadata.ip,
            user_agent: &metadata.user_agent,
            referer: &metadata.referer,
            timestamp: metadata.timestamp.to_rfc3339(),
            site_name: &self.senders.site_name,
        }
        .render()
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to render admin notification template");
            AppError::internal("An unexpected error occurred. Please try again later.")
        })?;

        Ok(OutgoingEmail {
            from: format!("{} Contact Form <{}>", self.senders.site_name, self.senders.admin_from),
            to: self.senders.admin_recipient.clone(),
            // Reply-To points at the submitter so the admin can answer directly
            reply_to: Some(submission.email.clone()),
            subject: format!("New contact from {}", submission.full_name()),
            html_body: body,
        })
    }

    fn build_user_receipt(&self, submission: &Submission) -> Result<OutgoingEmail, askama::Error> {
        let body = UserReceiptTemplate {
            first_name: &submission.first_name,
            message_summary: summarize(&submission.message),
            site_name: &self.senders.site_name,
        }
        .render()?;

        Ok(OutgoingEmail {
            from: format!("{} <{}>", self.senders.site_name, self.senders.no_reply_from),
            to: submission.email.clone(),
            reply_to: None,
            subject: format!(
                "Thanks {}! Your message has been received",
                submission.first_name
            ),
            html_body: body,
        })
    }
}
