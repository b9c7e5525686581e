//! Guest list handlers: create, list, RSVP, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{patch, post};
use axum::{Json, Router};

use crate::api::dto::{CreateGuestRequest, GuestResponse, RsvpRequest};
use crate::app_state::AppState;
use crate::domain::WeddingId;
use crate::domain::guest::{Guest, RsvpStatus};
use crate::error::{ErrorResponse, PlannerError};

/// `POST /weddings/:id/guests` — Add a guest.
///
/// # Errors
///
/// Returns [`PlannerError`] on an unknown RSVP discriminator or a missing
/// wedding.
#[utoipa::path(
    post,
    path = "/api/v1/weddings/{id}/guests",
    tag = "Guests",
    summary = "Add a guest",
    description = "Adds a guest to the guest list. Guests sharing a family name are seated together.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    request_body = CreateGuestRequest,
    responses(
        (status = 201, description = "Guest added", body = GuestResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn add_guest(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<CreateGuestRequest>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);

    if req.name.trim().is_empty() {
        return Err(PlannerError::InvalidRequest(
            "guest name must not be empty".to_string(),
        ));
    }
    let rsvp = match req.rsvp.as_deref() {
        Some(raw) => parse_rsvp(raw)?,
        None => RsvpStatus::Pending,
    };

    let guest = Guest {
        id: uuid::Uuid::new_v4(),
        name: req.name,
        family: req.family,
        vip: req.vip,
        elderly: req.elderly,
        rsvp,
        table_id: None,
        seat_number: None,
    };
    let response = GuestResponse::from(&guest);

    state.planning_service.add_guest(wedding_id, guest).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /weddings/:id/guests` — List all guests.
///
/// # Errors
///
/// Returns [`PlannerError::WeddingNotFound`] if the wedding does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/weddings/{id}/guests",
    tag = "Guests",
    summary = "List guests",
    description = "Returns the full guest list with RSVP and seating state.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    responses(
        (status = 200, description = "Guest list", body = Vec<GuestResponse>),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn list_guests(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let guests = state.planning_service.list_guests(wedding_id).await?;
    let data: Vec<GuestResponse> = guests.iter().map(GuestResponse::from).collect();
    Ok(Json(data))
}

/// `PATCH /weddings/:id/guests/:guest_id/rsvp` — Update a guest's RSVP.
///
/// # Errors
///
/// Returns [`PlannerError`] on an unknown discriminator or a missing
/// wedding or guest.
#[utoipa::path(
    patch,
    path = "/api/v1/weddings/{id}/guests/{guest_id}/rsvp",
    tag = "Guests",
    summary = "Update RSVP",
    description = "Updates a guest's RSVP state. Declining clears any seat the guest held.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
        ("guest_id" = uuid::Uuid, Path, description = "Guest UUID"),
    ),
    request_body = RsvpRequest,
    responses(
        (status = 204, description = "RSVP updated"),
        (status = 400, description = "Invalid RSVP value", body = ErrorResponse),
        (status = 404, description = "Wedding or guest not found", body = ErrorResponse),
    )
)]
pub async fn update_rsvp(
    State(state): State<AppState>,
    Path((id, guest_id)): Path<(uuid::Uuid, uuid::Uuid)>,
    Json(req): Json<RsvpRequest>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let rsvp = parse_rsvp(&req.rsvp)?;
    state
        .planning_service
        .set_rsvp(wedding_id, guest_id, rsvp)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /weddings/:id/guests/:guest_id` — Remove a guest.
///
/// # Errors
///
/// Returns [`PlannerError`] if the wedding or guest does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/weddings/{id}/guests/{guest_id}",
    tag = "Guests",
    summary = "Remove a guest",
    description = "Removes a guest from the guest list.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
        ("guest_id" = uuid::Uuid, Path, description = "Guest UUID"),
    ),
    responses(
        (status = 204, description = "Guest removed"),
        (status = 404, description = "Wedding or guest not found", body = ErrorResponse),
    )
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path((id, guest_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    state
        .planning_service
        .remove_guest(wedding_id, guest_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Guest list routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/weddings/{id}/guests", post(add_guest).get(list_guests))
        .route(
            "/weddings/{id}/guests/{guest_id}",
            axum::routing::delete(delete_guest),
        )
        .route(
            "/weddings/{id}/guests/{guest_id}/rsvp",
            patch(update_rsvp),
        )
}

/// Parses an RSVP discriminator string.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidRequest`] on unknown values.
fn parse_rsvp(raw: &str) -> Result<RsvpStatus, PlannerError> {
    match raw {
        "accepted" => Ok(RsvpStatus::Accepted),
        "pending" => Ok(RsvpStatus::Pending),
        "declined" => Ok(RsvpStatus::Declined),
        other => Err(PlannerError::InvalidRequest(format!(
            "unknown rsvp status: {other}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn known_rsvp_values_parse() {
        assert_eq!(parse_rsvp("accepted").ok(), Some(RsvpStatus::Accepted));
        assert_eq!(parse_rsvp("pending").ok(), Some(RsvpStatus::Pending));
        assert_eq!(parse_rsvp("declined").ok(), Some(RsvpStatus::Declined));
    }

    #[test]
    fn unknown_rsvp_value_is_rejected() {
        assert!(parse_rsvp("perhaps").is_err());
    }
}
