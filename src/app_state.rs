//! Shared application state injected into all Axum handlers.

use crate::data::Models;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database models over the shared connection pool.
    pub models: Models,
    /// Deployment environment label reported by the health check.
    pub environment: String,
}
