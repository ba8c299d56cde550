//! Application error type and HTTP response mapping.
//!
//! Every failure outcome of the contact pipeline is expressed as an
//! [`AppError`] and rendered as the uniform response envelope
//! `{ "success": false, "message": ..., "errors": ... }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Per-field violation messages, keyed by the wire field name (camelCase).
///
/// `BTreeMap` keeps the serialized order deterministic.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

#[derive(Debug)]
pub enum AppError {
    /// One or more fields failed validation. Carries every violation.
    Validation {
        message: String,
        errors: FieldErrors,
    },
    /// The request body could not be parsed as a JSON object.
    BadRequest { message: String },
    /// The declared request origin is not on the allow-list.
    Forbidden { message: String },
    /// The mandatory admin notification could not be delivered.
    DeliveryFailed { message: String },
    /// Anything unexpected. The message shown to the caller stays generic.
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn delivery_failed(message: impl Into<String>) -> Self {
        Self::DeliveryFailed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, message, Some(errors))
            }
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message, None),
            AppError::DeliveryFailed { message } => (StatusCode::BAD_GATEWAY, message, None),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(value: ValidationErrors) -> Self {
        let mut errors: FieldErrors = BTreeMap::new();

        for (field, violations) in value.field_errors() {
            let messages = violations
                .iter()
                .map(|v| {
                    v.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"))
                })
                .collect();
            errors.insert(snake_to_camel(&field), messages);
        }

        Self::Validation {
            message: "Validation failed".to_string(),
            errors,
        }
    }
}

/// Converts a Rust field identifier to its wire name.
///
/// Request DTOs use `#[serde(rename_all = "camelCase")]`, but validator
/// reports violations under the struct field names, e.g. `first_name`.
fn snake_to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("first_name"), "firstName");
        assert_eq!(snake_to_camel("email"), "email");
        assert_eq!(snake_to_camel("user_agent_string"), "userAgentString");
    }

    #[test]
    fn test_validation_errors_accumulate_per_field() {
        use validator::ValidationError;

        let mut source = ValidationErrors::new();
        source.add(
            "first_name".into(),
            ValidationError::new("regex").with_message("First name contains invalid characters".into()),
        );
        source.add(
            "email".into(),
            ValidationError::new("email").with_message("Email address is invalid".into()),
        );

        let err = AppError::from(source);
        let AppError::Validation { errors, .. } = err else {
            panic!("expected validation error");
        };

        assert_eq!(
            errors["firstName"],
            vec!["First name contains invalid characters".to_string()]
        );
        assert_eq!(errors["email"], vec!["Email address is invalid".to_string()]);
    }
}
