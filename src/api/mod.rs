//! HTTP layer for request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Origin filtering and request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
