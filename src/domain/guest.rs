//! Guests and RSVP state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A guest's confirmation status, gating seating eligibility.
///
/// Declined guests are never seated; accepted and pending guests are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    /// Guest confirmed attendance.
    Accepted,
    /// Invitation sent, no reply yet.
    Pending,
    /// Guest declined.
    Declined,
}

impl RsvpStatus {
    /// Returns `true` when the guest is eligible for seating
    /// (accepted or pending).
    #[must_use]
    pub const fn is_seatable(&self) -> bool {
        matches!(self, Self::Accepted | Self::Pending)
    }

    /// Returns the wire discriminator string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Pending => "pending",
            Self::Declined => "declined",
        }
    }
}

/// One invited guest.
///
/// Guests sharing a `family` name are seated atomically: the whole family
/// lands on one table or is not seated at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// Unique guest identifier.
    pub id: Uuid,
    /// Guest display name.
    pub name: String,
    /// Family group name. Guests without one fall into the `"Unknown"`
    /// bucket during auto-assignment.
    pub family: Option<String>,
    /// Whether the guest receives VIP table preference.
    pub vip: bool,
    /// Whether the guest is elderly; elderly members steer their family
    /// toward family-category tables.
    pub elderly: bool,
    /// Current RSVP state.
    pub rsvp: RsvpStatus,
    /// Assigned table, when seated.
    pub table_id: Option<Uuid>,
    /// Seat number within the table, unique per table and `<= capacity`.
    pub seat_number: Option<u32>,
}

impl Guest {
    /// Returns `true` when the guest has no table assignment yet.
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        self.table_id.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn declined_guests_are_not_seatable() {
        assert!(RsvpStatus::Accepted.is_seatable());
        assert!(RsvpStatus::Pending.is_seatable());
        assert!(!RsvpStatus::Declined.is_seatable());
    }

    #[test]
    fn unassigned_tracks_table_id() {
        let guest = Guest {
            id: Uuid::new_v4(),
            name: "Asha Patel".to_string(),
            family: Some("Patel".to_string()),
            vip: false,
            elderly: false,
            rsvp: RsvpStatus::Accepted,
            table_id: None,
            seat_number: None,
        };
        assert!(guest.is_unassigned());
    }
}
