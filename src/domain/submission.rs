//! Contact submission entity and request metadata.

use chrono::{DateTime, Utc};

/// A validated and normalized contact form submission.
///
/// Constructed only from input that passed field validation: names contain
/// letters, spaces, hyphens and apostrophes only, the email address is
/// trimmed and lowercased, and the message is trimmed to 10-2000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Returns the submitter's full name for email subjects and bodies.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Transport-level metadata captured by the HTTP layer.
///
/// Gathered once per request before dispatch and rendered into the admin
/// notification. The dispatcher itself never inspects request headers.
#[derive(Debug, Clone)]
pub struct SubmissionMetadata {
    /// Client IP address, or `"unknown"` when the peer address is unavailable.
    pub ip: String,
    /// `User-Agent` header value, or `"unknown"`.
    pub user_agent: String,
    /// `Referer` header value, or `"direct"`.
    pub referer: String,
    /// Server-side receive time.
    pub timestamp: DateTime<Utc>,
}

impl SubmissionMetadata {
    /// Metadata placeholder for contexts without an HTTP request (tests, docs).
    pub fn unknown() -> Self {
        Self {
            ip: "unknown".to_string(),
            user_agent: "unknown".to_string(),
            referer: "direct".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_first_and_last() {
        let submission = Submission {
            first_name: "Mary Anne".to_string(),
            last_name: "O'Neil".to_string(),
            email: "mary@example.com".to_string(),
            message: "Hello from the tests".to_string(),
        };

        assert_eq!(submission.full_name(), "Mary Anne O'Neil");
    }
}
