//! Table and seating handlers: table CRUD, auto-assignment, budget.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::seating_dto::TableResponse;
use crate::api::dto::{CreateTableRequest, SeatingPlanResponse};
use crate::app_state::AppState;
use crate::domain::WeddingId;
use crate::domain::table::{SeatingTable, TableCategory, TableShape};
use crate::error::{ErrorResponse, PlannerError};

/// `POST /weddings/:id/tables` — Add a seating table.
///
/// # Errors
///
/// Returns [`PlannerError`] on zero capacity, an unknown shape or
/// category discriminator, or a missing wedding.
#[utoipa::path(
    post,
    path = "/api/v1/weddings/{id}/tables",
    tag = "Seating",
    summary = "Add a table",
    description = "Adds a capacity-bounded seating table. Category steers family placement preference; shape is cosmetic.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    request_body = CreateTableRequest,
    responses(
        (status = 201, description = "Table added", body = TableResponse),
        (status = 400, description = "Invalid capacity, shape, or category", body = ErrorResponse),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn add_table(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<CreateTableRequest>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);

    let shape = match req.shape.as_deref() {
        Some(raw) => parse_shape(raw)?,
        None => TableShape::Round,
    };
    let category = match req.category.as_deref() {
        Some(raw) => parse_category(raw)?,
        None => TableCategory::General,
    };

    let table = SeatingTable {
        id: uuid::Uuid::new_v4(),
        name: req.name,
        capacity: req.capacity,
        shape,
        category,
    };
    let response = TableResponse::new(&table, 0);

    state.planning_service.add_table(wedding_id, table).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /weddings/:id/tables` — List tables with live occupancy.
///
/// # Errors
///
/// Returns [`PlannerError::WeddingNotFound`] if the wedding does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/weddings/{id}/tables",
    tag = "Seating",
    summary = "List tables",
    description = "Returns every table with the number of seats currently occupied.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    responses(
        (status = 200, description = "Table list", body = Vec<TableResponse>),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn list_tables(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let tables = state.planning_service.list_tables(wedding_id).await?;
    let data: Vec<TableResponse> = tables
        .iter()
        .map(|(table, occupied)| TableResponse::new(table, *occupied))
        .collect();
    Ok(Json(data))
}

/// `DELETE /weddings/:id/tables/:table_id` — Remove a table.
///
/// # Errors
///
/// Returns [`PlannerError`] if the wedding or table does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/weddings/{id}/tables/{table_id}",
    tag = "Seating",
    summary = "Remove a table",
    description = "Removes a table and clears the assignments of any guests seated there.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
        ("table_id" = uuid::Uuid, Path, description = "Table UUID"),
    ),
    responses(
        (status = 204, description = "Table removed"),
        (status = 404, description = "Wedding or table not found", body = ErrorResponse),
    )
)]
pub async fn delete_table(
    State(state): State<AppState>,
    Path((id, table_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    state
        .planning_service
        .remove_table(wedding_id, table_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /weddings/:id/seating/auto-assign` — Run the seating engine.
///
/// # Errors
///
/// Returns [`PlannerError::NoTablesAvailable`] when the wedding has no
/// tables, or [`PlannerError::WeddingNotFound`] for an unknown wedding.
#[utoipa::path(
    post,
    path = "/api/v1/weddings/{id}/seating/auto-assign",
    tag = "Seating",
    summary = "Auto-assign seating",
    description = "Greedily places whole families onto tables, preferring VIP tables for VIP families and family tables for families with elderly members. Families that fit nowhere are reported unplaced.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    responses(
        (status = 200, description = "Seating plan applied", body = SeatingPlanResponse),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
        (status = 422, description = "No tables available", body = ErrorResponse),
    )
)]
pub async fn auto_assign(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let plan = state.planning_service.auto_assign_seating(wedding_id).await?;
    Ok(Json(SeatingPlanResponse::from(plan)))
}

/// `GET /weddings/:id/budget` — Budget roll-up and guest counts.
///
/// # Errors
///
/// Returns [`PlannerError::WeddingNotFound`] if the wedding does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/weddings/{id}/budget",
    tag = "Seating",
    summary = "Get the budget overview",
    description = "Returns per-ceremony budget allocations, threshold alerts, and headline guest counts.",
    params(
        ("id" = uuid::Uuid, Path, description = "Wedding UUID"),
    ),
    responses(
        (status = 200, description = "Budget overview", body = serde_json::Value),
        (status = 404, description = "Wedding not found", body = ErrorResponse),
    )
)]
pub async fn get_budget(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PlannerError> {
    let wedding_id = WeddingId::from_uuid(id);
    let overview = state.planning_service.budget_overview(wedding_id).await?;
    Ok(Json(overview))
}

/// Table, seating, and budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/weddings/{id}/tables", post(add_table).get(list_tables))
        .route(
            "/weddings/{id}/tables/{table_id}",
            axum::routing::delete(delete_table),
        )
        .route("/weddings/{id}/seating/auto-assign", post(auto_assign))
        .route("/weddings/{id}/budget", get(get_budget))
}

/// Parses a table shape discriminator string.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidRequest`] on unknown values.
fn parse_shape(raw: &str) -> Result<TableShape, PlannerError> {
    match raw {
        "round" => Ok(TableShape::Round),
        "rectangular" => Ok(TableShape::Rectangular),
        "oval" => Ok(TableShape::Oval),
        other => Err(PlannerError::InvalidRequest(format!(
            "unknown table shape: {other}"
        ))),
    }
}

/// Parses a table category discriminator string.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidRequest`] on unknown values.
fn parse_category(raw: &str) -> Result<TableCategory, PlannerError> {
    match raw {
        "vip" => Ok(TableCategory::Vip),
        "family" => Ok(TableCategory::Family),
        "friends" => Ok(TableCategory::Friends),
        "general" => Ok(TableCategory::General),
        other => Err(PlannerError::InvalidRequest(format!(
            "unknown table category: {other}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_parse() {
        for category in ["vip", "family", "friends", "general"] {
            assert!(parse_category(category).is_ok());
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(parse_category("balcony").is_err());
    }

    #[test]
    fn unknown_shape_is_rejected() {
        assert!(parse_shape("triangular").is_err());
    }
}
