//! Askama templates for outgoing email bodies.
//!
//! HTML auto-escaping doubles as the sanitization layer: submitted text is
//! escaped before it reaches a mail client.

use askama::Template;

/// Maximum number of characters quoted back in the receipt summary.
const SUMMARY_MAX_CHARS: usize = 150;

/// Admin notification body, rendered from `templates/emails/admin_notification.html`.
#[derive(Template)]
#[template(path = "emails/admin_notification.html")]
pub struct AdminNotificationTemplate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub ip: &'a str,
    pub user_agent: &'a str,
    pub referer: &'a str,
    pub timestamp: String,
    pub site_name: &'a str,
}

/// Submitter receipt body, rendered from `templates/emails/user_receipt.html`.
#[derive(Template)]
#[template(path = "emails/user_receipt.html")]
pub struct UserReceiptTemplate<'a> {
    pub first_name: &'a str,
    pub message_summary: String,
    pub site_name: &'a str,
}

/// Truncates a message to the receipt summary length on a char boundary.
pub fn summarize(message: &str) -> String {
    if message.chars().count() <= SUMMARY_MAX_CHARS {
        return message.to_string();
    }

    let truncated: String = message.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{truncated}…")
}
