//! HTTP request handlers for API endpoints.

pub mod contact;
pub mod health;

pub use contact::contact_handler;
pub use health::health_handler;
