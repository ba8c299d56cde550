//! HTTP middleware for request processing and protection.
//!
//! Provides origin filtering and observability middleware.

pub mod origin;
pub mod tracing;
