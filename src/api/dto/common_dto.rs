//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Body of `GET /v1/healthcheck`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"available"` while the server is accepting requests.
    pub status: String,
    /// Deployment details.
    pub system_info: SystemInfo,
}

/// Deployment details reported by the health check.
#[derive(Debug, Serialize, ToSchema)]
pub struct SystemInfo {
    /// Environment label from configuration.
    pub environment: String,
    /// Crate version.
    pub version: String,
    /// Server time as RFC 3339.
    pub timestamp: String,
}
