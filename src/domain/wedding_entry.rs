//! Wedding aggregate combining planning state with server-side metadata.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::WeddingId;
use super::ceremony::SubEvent;
use super::guest::Guest;
use super::table::SeatingTable;

/// Aggregate holding one wedding's full planning state.
///
/// Each wedding in the registry is stored as a `WeddingEntry`. The
/// timeline, guest list, and tables are the live planning state consumed
/// by the engines; the remaining fields track operational metadata.
#[derive(Debug)]
pub struct WeddingEntry {
    /// Unique wedding identifier (immutable after creation).
    pub wedding_id: WeddingId,

    /// Owning organization (immutable after creation).
    pub organization_id: Uuid,

    /// Couple display name (e.g. `"Priya & Rohan"`).
    pub couple_name: String,

    /// Date of the main wedding ceremony.
    pub wedding_date: NaiveDate,

    /// Total budget in minor currency units, when set.
    pub total_budget: Option<u64>,

    /// Ceremony timeline. Updated on every timeline mutation.
    pub sub_events: Vec<SubEvent>,

    /// Guest list with RSVP and seating state.
    pub guests: Vec<Guest>,

    /// Seating tables.
    pub tables: Vec<SeatingTable>,

    /// ISO-8601 creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,

    /// ISO-8601 timestamp of last state mutation.
    pub last_modified_at: DateTime<Utc>,

    /// Number of seating auto-assignment runs executed.
    pub reseat_count: u64,
}

impl WeddingEntry {
    /// Creates a new `WeddingEntry` with an empty timeline, guest list,
    /// and table set.
    #[must_use]
    pub fn new(
        wedding_id: WeddingId,
        organization_id: Uuid,
        couple_name: String,
        wedding_date: NaiveDate,
        total_budget: Option<u64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            wedding_id,
            organization_id,
            couple_name,
            wedding_date,
            total_budget,
            sub_events: Vec::new(),
            guests: Vec::new(),
            tables: Vec::new(),
            created_at: now,
            last_modified_at: now,
            reseat_count: 0,
        }
    }
}

/// Lightweight summary of a wedding for list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct WeddingSummary {
    /// Wedding identifier.
    pub wedding_id: WeddingId,
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

impl From<&WeddingEntry> for WeddingSummary {
    fn from(entry: &WeddingEntry) -> Self {
        Self {
            wedding_id: entry.wedding_id,
            organization_id: entry.organization_id,
            couple_name: entry.couple_name.clone(),
            wedding_date: entry.wedding_date,
            event_count: entry.sub_events.len(),
            guest_count: entry.guests.len(),
            created_at: entry.created_at,
        }
    }
}
