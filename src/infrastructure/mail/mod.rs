//! Mail delivery layer.
//!
//! Provides two implementations of the domain [`crate::domain::mailer::Mailer`]
//! trait:
//! - [`SmtpMailer`] - Production SMTP transport via lettre
//! - [`NullMailer`] - No-op implementation for development/disabled delivery

mod null_mailer;
mod smtp_mailer;

pub use null_mailer::NullMailer;
pub use smtp_mailer::SmtpMailer;
