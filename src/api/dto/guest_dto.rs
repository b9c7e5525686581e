//! Guest DTOs: create, RSVP, and list responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::guest::Guest;

/// Request body for `POST /weddings/{id}/guests`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGuestRequest {
    /// Guest display name.
    pub name: String,
    /// Family group name; guests without one share the `"Unknown"`
    /// seating bucket.
    #[serde(default)]
    pub family: Option<String>,
    /// Whether the guest receives VIP table preference.
    #[serde(default)]
    pub vip: bool,
    /// Whether the guest is elderly.
    #[serde(default)]
    pub elderly: bool,
    /// Initial RSVP discriminator: `accepted`, `pending`, or `declined`.
    /// Defaults to `pending`.
    #[serde(default)]
    pub rsvp: Option<String>,
}

/// Request body for `PATCH /weddings/{id}/guests/{guest_id}/rsvp`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RsvpRequest {
    /// New RSVP discriminator: `accepted`, `pending`, or `declined`.
    pub rsvp: String,
}

/// One guest as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct GuestResponse {
    /// Guest identifier.
    pub id: Uuid,
    /// Guest display name.
    pub name: String,
    /// Family group name.
    pub family: Option<String>,
    /// VIP flag.
    pub vip: bool,
    /// Elderly flag.
    pub elderly: bool,
    /// RSVP discriminator.
    pub rsvp: String,
    /// Assigned table, when seated.
    pub table_id: Option<Uuid>,
    /// Seat number within the table.
    pub seat_number: Option<u32>,
}

impl From<&Guest> for GuestResponse {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name.clone(),
            family: guest.family.clone(),
            vip: guest.vip,
            elderly: guest.elderly,
            rsvp: guest.rsvp.as_str().to_string(),
            table_id: guest.table_id,
            seat_number: guest.seat_number,
        }
    }
}
