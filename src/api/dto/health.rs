//! DTOs for the health check endpoint.

use serde::Serialize;

/// Overall health report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-component health results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub mail: CheckStatus,
}

/// Status of a single component check.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
