//! Wedding CRUD handlers: create, list, get, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{
    CreateWeddingRequest, CreateWeddingResponse, PaginationMeta, WeddingListParams,
    WeddingListResponse, WeddingSummaryDto,
};
use crate::app_state::AppState;
use crate::domain::WeddingId;
use crate::error::{ErrorResponse, PlannerError};

/// `POST /weddings` — Create a new wedding.
///
/// # Errors
///
/// Returns [`PlannerError`] on invalid input.
#[utoipa::path(
    post,
    path = "/api/v1/weddings",
    tag = "Weddings",
    summary = "Create a new wedding",
    description = "Creates a wedding with an empty ceremony timeline, guest list, and table set.",
    request_body = CreateWeddingRequest,
    responses(
        (status = 201, description = "Wedding created successfully", body = CreateWeddingResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_wedding(
    State(state): State<AppState>,
    Json(req): Json<CreateWeddingRequest>,
) -> Result<impl IntoResponse, PlannerError> {
    if req.couple_name.trim().is_empty() {
        return Err(PlannerError::InvalidRequest(
            "couple_name must not be empty".to_string(),
        ));
    }

    let wedding_id = state
        .planning_service
        .create_wedding(
            req.organization_id,
            &req.couple_name,
            req.wedding_date,
            req.total_budget,
        )
        .await?;

    let response = CreateWeddingResponse {
        wedding_id: *wedding_id.as_uuid(),
        couple_name: req.couple_name,
        wedding_date: req.wedding_date,
        created_at: Utc::now(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /weddings` — List weddings with pagination and optional
/// organization filter.
///
/// # Errors
///
/// Returns [`PlannerError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/weddings",
    tag = "Weddings",
    summary = "List weddings",
    description = "Returns a paginated list of weddings, optionally filtered by owning organization.",
    params(WeddingListParams),
    responses(
        (status = 200, description = "Paginated wedding list", body = WeddingListResponse),
    )
)]
pub async fn list_weddings(
    State(state): State<AppState>,
    Query(params): Query<WeddingListParams>,
) -> Result<impl IntoResponse, PlannerError> {
    let params = params.clamped();
    let summaries = state
        .planning_service
        .list_weddings(params.organization_id)
        .await;

    let total = summaries.len() as u32;
    let per_page = params.per_page;
    let page = params.page;
    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    let start = ((page - 1) * per_page) as usize;
    let data: Vec<WeddingSummaryDto> = summaries
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .map(|s| WeddingSummaryDto {
            wedding_id: *s.wedding_id.as_uuid(),
            organization_id: s.organization_id,
            couple_name: s.couple_name,
            wedding_date: s.wedding_date,
            event_count: s.event_count,
            guest_count: s.guest_count,
            created_at: s.created_at,
        })
        .collect();

    Ok(Json(WeddingListResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    }))
}

/// `GET /weddings/:id` — Get wedding details.
///
/// # Errors
///
/// Returns [`PlannerError::WeddingNotFound`] if the wedding does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/weddings/{id}",
    tag = "Weddings",
    summary = "Get wedding details",
    description = "Returns full details for a single wedding including timeline, guest, and table counts.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    responses(
        (status = 200, description = "Wedding details", body = serde_json::Value),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn get_wedding(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let entry_lock = state.planning_service.registry().get(wedding_id).await?;
    let entry = entry_lock.read().await;

    let response = serde_json::json!({
        "wedding_id": entry.wedding_id,
        "organization_id": entry.organization_id,
        "couple_name": entry.couple_name,
        "wedding_date": entry.wedding_date,
        "total_budget": entry.total_budget,
        "event_count": entry.sub_events.len(),
        "guest_count": entry.guests.len(),
        "table_count": entry.tables.len(),
        "reseat_count": entry.reseat_count,
        "created_at": entry.created_at.to_rfc3339(),
        "updated_at": entry.last_modified_at.to_rfc3339(),
    });

    Ok(Json(response))
}

/// `DELETE /weddings/:id` — Remove a wedding.
///
/// # Errors
///
/// Returns [`PlannerError::WeddingNotFound`] if the wedding does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/weddings/{id}",
    tag = "Weddings",
    summary = "Delete a wedding",
    description = "Removes a wedding and emits a WeddingRemoved event.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    responses(
        (status = 204, description = "Wedding deleted"),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn delete_wedding(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    state.planning_service.remove_wedding(wedding_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Wedding management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/weddings", post(create_wedding).get(list_weddings))
        .route("/weddings/{id}", get(get_wedding).delete(delete_wedding))
}
