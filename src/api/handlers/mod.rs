//! REST endpoint handlers organized by resource.

pub mod event;
pub mod guest;
pub mod seating;
pub mod system;
pub mod wedding;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(wedding::routes())
        .merge(event::routes())
        .merge(guest::routes())
        .merge(seating::routes())
}
