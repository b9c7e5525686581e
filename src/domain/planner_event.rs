//! Domain events reflecting wedding state mutations.
//!
//! Every state change emits a [`PlannerEvent`] through the
//! [`super::EventBus`]. Events are broadcast to WebSocket subscribers and
//! optionally persisted to the PostgreSQL event log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::WeddingId;
use super::guest::RsvpStatus;

/// What kind of timeline mutation occurred.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineChangeKind {
    /// A ceremony was added to the timeline.
    EventAdded,
    /// A ceremony was updated.
    EventUpdated,
    /// A ceremony was removed.
    EventRemoved,
}

/// Domain event emitted after every state mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum PlannerEvent {
    /// Emitted when a new wedding is created.
    WeddingCreated {
        /// Wedding identifier.
        wedding_id: WeddingId,
        /// Owning organization.
        organization_id: Uuid,
        /// Couple display name.
        couple_name: String,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a wedding is removed.
    WeddingRemoved {
        /// Wedding identifier.
        wedding_id: WeddingId,
        /// Removal timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after any ceremony timeline mutation. Subscribers re-fetch
    /// the timeline to pick up fresh status classifications.
    TimelineChanged {
        /// Wedding identifier.
        wedding_id: WeddingId,
        /// Affected sub-event.
        event_id: Uuid,
        /// What happened to the sub-event.
        change: TimelineChangeKind,
        /// Mutation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a guest's RSVP state changes.
    RsvpChanged {
        /// Wedding identifier.
        wedding_id: WeddingId,
        /// Affected guest.
        guest_id: Uuid,
        /// New RSVP state.
        rsvp: RsvpStatus,
        /// Mutation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a seating auto-assignment run.
    SeatingAssigned {
        /// Wedding identifier.
        wedding_id: WeddingId,
        /// Guests placed in this run.
        assigned_count: u32,
        /// Families that fit on no table, by name.
        unplaced_families: Vec<String>,
        /// Run timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl PlannerEvent {
    /// Returns the wedding ID associated with this event.
    #[must_use]
    pub fn wedding_id(&self) -> WeddingId {
        match self {
            Self::WeddingCreated { wedding_id, .. }
            | Self::WeddingRemoved { wedding_id, .. }
            | Self::TimelineChanged { wedding_id, .. }
            | Self::RsvpChanged { wedding_id, .. }
            | Self::SeatingAssigned { wedding_id, .. } => *wedding_id,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::WeddingCreated { .. } => "wedding_created",
            Self::WeddingRemoved { .. } => "wedding_removed",
            Self::TimelineChanged { .. } => "timeline_changed",
            Self::RsvpChanged { .. } => "rsvp_changed",
            Self::SeatingAssigned { .. } => "seating_assigned",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn wedding_created_event_type() {
        let event = PlannerEvent::WeddingCreated {
            wedding_id: WeddingId::new(),
            organization_id: Uuid::new_v4(),
            couple_name: "Priya & Rohan".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type_str(), "wedding_created");
    }

    #[test]
    fn seating_assigned_serializes() {
        let event = PlannerEvent::SeatingAssigned {
            wedding_id: WeddingId::new(),
            assigned_count: 5,
            unplaced_families: vec!["Mehta".to_string()],
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event);
        assert!(json.is_ok());
        let json_str = json.unwrap_or_default();
        assert!(json_str.contains("seating_assigned"));
        assert!(json_str.contains("Mehta"));
    }

    #[test]
    fn wedding_id_accessor() {
        let id = WeddingId::new();
        let event = PlannerEvent::WeddingRemoved {
            wedding_id: id,
            timestamp: Utc::now(),
        };
        assert_eq!(event.wedding_id(), id);
    }
}
