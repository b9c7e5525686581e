//! System endpoints: health check, ceremony catalog, hotel suggestions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Canonical ceremony info.
#[derive(Debug, Serialize, ToSchema)]
struct CeremonyTypeInfo {
    kind: &'static str,
    label: &'static str,
    description: &'static str,
}

/// `GET /config/ceremony-types` — List canonical ceremony kinds.
#[utoipa::path(
    get,
    path = "/config/ceremony-types",
    tag = "System",
    summary = "List ceremony kinds",
    description = "Returns metadata for every canonical ceremony kind a timeline can carry.",
    responses(
        (status = 200, description = "Ceremony catalog", body = Vec<CeremonyTypeInfo>),
    )
)]
pub async fn ceremony_types_handler() -> impl IntoResponse {
    let types = vec![
        CeremonyTypeInfo {
            kind: "engagement",
            label: "Engagement",
            description: "Ring exchange, usually months ahead",
        },
        CeremonyTypeInfo {
            kind: "mehendi",
            label: "Mehendi",
            description: "Henna ceremony",
        },
        CeremonyTypeInfo {
            kind: "haldi",
            label: "Haldi",
            description: "Turmeric ceremony",
        },
        CeremonyTypeInfo {
            kind: "sangeet",
            label: "Sangeet",
            description: "Music and dance night",
        },
        CeremonyTypeInfo {
            kind: "wedding",
            label: "Wedding",
            description: "The wedding ceremony itself",
        },
        CeremonyTypeInfo {
            kind: "reception",
            label: "Reception",
            description: "Post-wedding reception",
        },
        CeremonyTypeInfo {
            kind: "custom",
            label: "Custom",
            description: "Organizer-defined ceremony with its own name",
        },
    ];
    (StatusCode::OK, Json(types))
}

/// `GET /config/hotels` — Suggested accommodation list.
#[utoipa::path(
    get,
    path = "/config/hotels",
    tag = "System",
    summary = "List suggested hotels",
    description = "Returns the configured default hotel suggestions for out-of-town guest accommodation.",
    responses(
        (status = 200, description = "Hotel suggestions", body = Vec<String>),
    )
)]
pub async fn hotels_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.default_hotels.as_ref().clone()))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/ceremony-types", get(ceremony_types_handler))
        .route("/config/hotels", get(hotels_handler))
}
