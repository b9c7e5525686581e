//! Table and seating DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::table::SeatingTable;
use crate::engine::seating::SeatingPlan;

/// Request body for `POST /weddings/{id}/tables`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTableRequest {
    /// Table display name (e.g. `"T1"`).
    pub name: String,
    /// Number of seats; must be greater than zero.
    pub capacity: u32,
    /// Shape discriminator: `round`, `rectangular`, or `oval`.
    /// Defaults to `round`.
    #[serde(default)]
    pub shape: Option<String>,
    /// Category discriminator: `vip`, `family`, `friends`, or `general`.
    /// Defaults to `general`.
    #[serde(default)]
    pub category: Option<String>,
}

/// One table with its live occupancy.
#[derive(Debug, Serialize, ToSchema)]
pub struct TableResponse {
    /// Table identifier.
    pub id: Uuid,
    /// Table display name.
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
    /// Shape discriminator.
    pub shape: String,
    /// Category discriminator.
    pub category: String,
    /// Seats currently occupied.
    pub occupied: u32,
}

impl TableResponse {
    /// Builds a response row from a table and its occupancy.
    #[must_use]
    pub fn new(table: &SeatingTable, occupied: u32) -> Self {
        Self {
            id: table.id,
            name: table.name.clone(),
            capacity: table.capacity,
            shape: table.shape.as_str().to_string(),
            category: table.category.as_str().to_string(),
            occupied,
        }
    }
}

/// One computed seat assignment.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlacementDto {
    /// Guest being seated.
    pub guest_id: Uuid,
    /// Table the guest's family was placed at.
    pub table_id: Uuid,
    /// Seat number within the table, starting at 1.
    pub seat_number: u32,
}

/// Response body for `POST /weddings/{id}/seating/auto-assign`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeatingPlanResponse {
    /// Total guests placed in this run.
    pub assigned_count: u32,
    /// Every seat assignment computed in this run.
    pub placements: Vec<PlacementDto>,
    /// Families that fit on no table, by family name.
    pub unplaced_families: Vec<String>,
}

impl From<SeatingPlan> for SeatingPlanResponse {
    fn from(plan: SeatingPlan) -> Self {
        Self {
            assigned_count: plan.assigned_count,
            placements: plan
                .placements
                .into_iter()
                .map(|p| PlacementDto {
                    guest_id: p.guest_id,
                    table_id: p.table_id,
                    seat_number: p.seat_number,
                })
                .collect(),
            unplaced_families: plan.unplaced_families,
        }
    }
}
