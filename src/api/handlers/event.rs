//! Ceremony timeline handlers: sub-event CRUD and status classification.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{SubEventRequest, SubEventResponse, TimelineEntry, VendorAssignmentDto};
use crate::app_state::AppState;
use crate::domain::WeddingId;
use crate::domain::ceremony::{CeremonyKind, SubEvent, VendorAssignment, VendorStatus};
use crate::error::{ErrorResponse, PlannerError};

/// `POST /weddings/:id/events` — Add a ceremony to the timeline.
///
/// # Errors
///
/// Returns [`PlannerError`] on an unknown ceremony kind, malformed
/// timestamps, or a missing wedding.
#[utoipa::path(
    post,
    path = "/api/v1/weddings/{id}/events",
    tag = "Timeline",
    summary = "Add a ceremony",
    description = "Adds a ceremony sub-event to the wedding timeline. The `kind` field selects the canonical ceremony; `custom` ceremonies carry their own name.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    request_body = SubEventRequest,
    responses(
        (status = 201, description = "Ceremony added", body = SubEventResponse),
        (status = 400, description = "Invalid kind or timestamps", body = ErrorResponse),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn add_event(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<SubEventRequest>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let event = build_sub_event(&req)?;
    let response = SubEventResponse::from(&event);

    state.planning_service.add_sub_event(wedding_id, event).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// `PUT /weddings/:id/events/:event_id` — Replace a ceremony's fields.
///
/// # Errors
///
/// Returns [`PlannerError`] on invalid input or a missing wedding or
/// sub-event.
#[utoipa::path(
    put,
    path = "/api/v1/weddings/{id}/events/{event_id}",
    tag = "Timeline",
    summary = "Update a ceremony",
    description = "Replaces a ceremony's planning fields, keeping its identity.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
        ("event_id" = uuid::Uuid, Path, description = "Sub-event UUID"),
    ),
    request_body = SubEventRequest,
    responses(
        (status = 200, description = "Ceremony updated", body = SubEventResponse),
        (status = 400, description = "Invalid kind or timestamps", body = ErrorResponse),
        (status = 404, description = "Wedding or ceremony not found", body = ErrorResponse),
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path((id, event_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<SubEventRequest>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let mut event = build_sub_event(&req)?;
    event.id = event_id;
    let response = SubEventResponse::from(&event);

    state
        .planning_service
        .update_sub_event(wedding_id, event_id, event)
        .await?;

    Ok(Json(response))
}

/// `DELETE /weddings/:id/events/:event_id` — Remove a ceremony.
///
/// # Errors
///
/// Returns [`PlannerError`] if the wedding or sub-event does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/weddings/{id}/events/{event_id}",
    tag = "Timeline",
    summary = "Remove a ceremony",
    description = "Removes a ceremony from the timeline.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
        ("event_id" = uuid::Uuid, Path, description = "Sub-event UUID"),
    ),
    responses(
        (status = 204, description = "Ceremony removed"),
        (status = 404, description = "Wedding or ceremony not found", body = ErrorResponse),
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path((id, event_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    state
        .planning_service
        .remove_sub_event(wedding_id, event_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /weddings/:id/timeline` — The timeline with fresh status
/// classifications.
///
/// # Errors
///
/// Returns [`PlannerError::WeddingNotFound`] if the wedding does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/weddings/{id}/timeline",
    tag = "Timeline",
    summary = "Get the classified timeline",
    description = "Returns every ceremony with a freshly computed status: ready, attention, or conflict, plus human-readable issue and conflict lists.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    responses(
        (status = 200, description = "Classified timeline", body = Vec<TimelineEntry>),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let timeline = state.planning_service.timeline(wedding_id).await?;

    let entries: Vec<TimelineEntry> = timeline
        .iter()
        .map(|(event, report)| TimelineEntry::new(event, report.clone()))
        .collect();

    Ok(Json(entries))
}

/// Timeline routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/weddings/{id}/events", post(add_event))
        .route(
            "/weddings/{id}/events/{event_id}",
            put(update_event).delete(delete_event),
        )
        .route("/weddings/{id}/timeline", get(get_timeline))
}

// ── Request Parsing Helpers ─────────────────────────────────────────────

/// Parses a `SubEventRequest` into a domain [`SubEvent`] with a fresh ID.
///
/// # Errors
///
/// Returns a [`PlannerError`] on an unknown ceremony kind or vendor
/// status discriminator.
fn build_sub_event(req: &SubEventRequest) -> Result<SubEvent, PlannerError> {
    let kind = parse_ceremony_kind(&req.kind)?;

    let mut vendors = Vec::with_capacity(req.vendors.len());
    for dto in &req.vendors {
        vendors.push(parse_vendor(dto)?);
    }

    Ok(SubEvent {
        id: uuid::Uuid::new_v4(),
        kind,
        custom_name: req.custom_name.clone(),
        starts_at: req.starts_at,
        ends_at: req.ends_at,
        venue: req.venue.clone(),
        expected_guests: req.expected_guests,
        vendors,
        transport_required: req.transport_required,
        transport_assigned: req.transport_assigned,
        allocated_budget: req.allocated_budget,
        guest_subset: req.guest_subset.clone(),
    })
}

fn parse_ceremony_kind(kind: &str) -> Result<CeremonyKind, PlannerError> {
    match kind {
        "engagement" => Ok(CeremonyKind::Engagement),
        "mehendi" => Ok(CeremonyKind::Mehendi),
        "haldi" => Ok(CeremonyKind::Haldi),
        "sangeet" => Ok(CeremonyKind::Sangeet),
        "wedding" => Ok(CeremonyKind::Wedding),
        "reception" => Ok(CeremonyKind::Reception),
        "custom" => Ok(CeremonyKind::Custom),
        other => Err(PlannerError::InvalidRequest(format!(
            "unknown ceremony kind: {other}"
        ))),
    }
}

fn parse_vendor(dto: &VendorAssignmentDto) -> Result<VendorAssignment, PlannerError> {
    let status = match dto.status.as_str() {
        "confirmed" => VendorStatus::Confirmed,
        "pending" => VendorStatus::Pending,
        "declined" => VendorStatus::Declined,
        other => {
            return Err(PlannerError::InvalidRequest(format!(
                "unknown vendor status: {other}"
            )));
        }
    };
    Ok(VendorAssignment {
        vendor_id: dto.vendor_id.unwrap_or_else(uuid::Uuid::new_v4),
        vendor_name: dto.vendor_name.clone(),
        status,
    })
}
