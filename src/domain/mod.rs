//! Domain layer containing business entities and logic.
//!
//! This module defines the core types of the contact pipeline independent of
//! HTTP and SMTP concerns.
//!
//! # Architecture
//!
//! - [`submission`] - Normalized contact submission and its request metadata
//! - [`mailer`] - Mail delivery trait implemented by the infrastructure layer
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The [`mailer::Mailer`] trait defines the contract implemented by the
//!   infrastructure layer and substituted with doubles in tests
//! - Delivery orchestration lives in services (see [`crate::application::services`])

pub mod mailer;
pub mod submission;
