//! DTOs for the contact form endpoint.

use crate::domain::submission::Submission;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for name validation.
///
/// Matches empty input on purpose: emptiness is reported by the length rule
/// alone, so an empty name produces one violation, not two.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]*$").unwrap());

/// Raw contact form submission as received on the wire.
///
/// Missing fields deserialize to empty strings so that every field is
/// validated and reported. Call [`ContactRequest::normalized`] before
/// validating.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    #[validate(regex(
        path = "*NAME_REGEX",
        message = "First name may only contain letters, spaces, hyphens and apostrophes"
    ))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    #[validate(regex(
        path = "*NAME_REGEX",
        message = "Last name may only contain letters, spaces, hyphens and apostrophes"
    ))]
    pub last_name: String,

    #[serde(default)]
    #[validate(email(message = "Email address is invalid"))]
    #[validate(length(max = 100, message = "Email must be at most 100 characters"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10, max = 2000, message = "Message must be 10-2000 characters"))]
    pub message: String,

    /// Honeypot field. Hidden on the form; humans leave it empty.
    #[serde(default)]
    pub website: Option<String>,
}

impl ContactRequest {
    /// Normalizes the raw input: trims every field and lowercases the email.
    ///
    /// Validation length bounds apply to the normalized values.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            message: self.message.trim().to_string(),
            website: self.website,
        }
    }

    /// Returns true when the honeypot field was filled in.
    pub fn is_bot(&self) -> bool {
        self.website
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Converts validated input into the domain submission.
    pub fn into_submission(self) -> Submission {
        Submission {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            message: self.message,
        }
    }
}

/// Response envelope for accepted submissions.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ContactResponse {
    /// Success envelope returned for delivered and honeypot-trapped
    /// submissions alike.
    pub fn accepted(id: Option<String>) -> Self {
        Self {
            success: true,
            message: "Thank you for your message! We'll get back to you soon.".to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I would like to talk about a project.".to_string(),
            website: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().normalized().validate().is_ok());
    }

    #[test]
    fn test_email_is_trimmed_and_lowercased() {
        let mut request = valid_request();
        request.email = "  USER@Example.COM  ".to_string();

        let normalized = request.normalized();
        assert_eq!(normalized.email, "user@example.com");
        assert!(normalized.validate().is_ok());
    }

    #[test]
    fn test_name_rejects_digits_and_symbols() {
        for bad in ["J4ne", "Jane!", "Jane_Doe", "Jane@"] {
            let mut request = valid_request();
            request.first_name = bad.to_string();

            let errors = request.normalized().validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("first_name"),
                "expected first_name violation for {bad:?}"
            );
        }
    }

    #[test]
    fn test_name_accepts_spaces_hyphens_apostrophes() {
        let mut request = valid_request();
        request.first_name = "Mary Anne".to_string();
        request.last_name = "O'Connor-Smith".to_string();

        assert!(request.normalized().validate().is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        let mut request = valid_request();
        request.first_name = "a".repeat(50);
        assert!(request.clone().normalized().validate().is_ok());

        request.first_name = "a".repeat(51);
        assert!(request.normalized().validate().is_err());
    }

    #[test]
    fn test_message_length_boundaries() {
        let cases = [(9, false), (10, true), (2000, true), (2001, false)];

        for (len, ok) in cases {
            let mut request = valid_request();
            request.message = "a".repeat(len);

            let result = request.normalized().validate();
            assert_eq!(result.is_ok(), ok, "message length {len}");
        }
    }

    #[test]
    fn test_email_length_bound() {
        let mut request = valid_request();
        // 92 + @ + 11 = 104 characters
        request.email = format!("{}@example.com", "a".repeat(92));

        let errors = request.normalized().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_all_invalid_fields_are_reported() {
        let request = ContactRequest {
            first_name: "".to_string(),
            last_name: "123".to_string(),
            email: "not-an-email".to_string(),
            message: "short".to_string(),
            website: None,
        };

        let errors = request.normalized().validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn test_whitespace_only_fields_fail_after_trim() {
        let request = ContactRequest {
            first_name: "   ".to_string(),
            last_name: " \t ".to_string(),
            email: "  ".to_string(),
            message: "         ".to_string(),
            website: None,
        };

        let errors = request.normalized().validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 4);
    }

    #[test]
    fn test_honeypot_detection() {
        let mut request = valid_request();
        assert!(!request.is_bot());

        request.website = Some("".to_string());
        assert!(!request.is_bot());

        request.website = Some("https://spam.example".to_string());
        assert!(request.is_bot());
    }
}
