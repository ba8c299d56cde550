//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for mail delivery.
//!
//! # Modules
//!
//! - [`mail`] - Mail transports (SMTP and no-op implementations)

pub mod mail;
