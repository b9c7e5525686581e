//! Wedding-related DTOs for create, get, and list operations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::common_dto::PaginationMeta;

/// Request body for `POST /weddings`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWeddingRequest {
    /// Owning organization.
    pub organization_id: Uuid,
    /// Couple display name (e.g. `"Priya & Rohan"`).
    pub couple_name: String,
    /// Date of the main wedding ceremony.
    pub wedding_date: NaiveDate,
    /// Total budget in minor currency units.
    #[serde(default)]
    pub total_budget: Option<u64>,
}

/// Response body for `POST /weddings` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateWeddingResponse {
    /// Unique wedding identifier.
    pub wedding_id: Uuid,
    /// Couple name echoed from request.
    pub couple_name: String,
    /// Wedding date echoed from request.
    pub wedding_date: NaiveDate,
    /// Server creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query parameters for `GET /weddings`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct WeddingListParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (max 100). Defaults to 20.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Restrict the list to one organization.
    #[serde(default)]
    pub organization_id: Option<Uuid>,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl WeddingListParams {
    /// Clamps `per_page` to the allowed maximum of 100.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, 100),
            organization_id: self.organization_id,
        }
    }
}

/// Wedding summary for list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct WeddingSummaryDto {
    /// Wedding identifier.
    pub wedding_id: Uuid,
    /// Owning organization.
    pub organization_id: Uuid,
    /// Couple display name.
    pub couple_name: String,
    /// Date of the main ceremony.
    pub wedding_date: NaiveDate,
    /// Number of ceremonies on the timeline.
    pub event_count: usize,
    /// Number of invited guests.
    pub guest_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Paginated list response for `GET /weddings`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WeddingListResponse {
    /// Wedding summaries.
    pub data: Vec<WeddingSummaryDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
