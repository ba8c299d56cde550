//! Application layer services implementing business logic.
//!
//! This layer orchestrates the contact pipeline: it consumes the domain's
//! [`crate::domain::mailer::Mailer`] trait, renders notification bodies, and
//! reconciles partial delivery failure into one result for the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - Two-step notification delivery
//! - [`templates`] - Askama email body templates

pub mod services;
pub mod templates;
