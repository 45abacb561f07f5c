//! REST endpoint handlers organized by resource.

pub mod games;
pub mod system;
pub mod users;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(system::routes())
        .merge(games::routes())
        .merge(users::routes())
}
