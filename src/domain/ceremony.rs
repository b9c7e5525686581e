//! Ceremony sub-events and vendor assignments.
//!
//! A wedding is a multi-day sequence of ceremonies. Each [`SubEvent`] is
//! one ceremony with its own time window, venue, vendors, transport, and
//! budget allocation. The timeline status engine consumes snapshots of
//! these records; it never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical ceremony within a multi-day wedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeremonyKind {
    /// Ring exchange, usually months before the wedding day.
    Engagement,
    /// Henna ceremony.
    Mehendi,
    /// Turmeric ceremony.
    Haldi,
    /// Music and dance night.
    Sangeet,
    /// The wedding ceremony itself.
    Wedding,
    /// Post-wedding reception.
    Reception,
    /// Organizer-defined ceremony; carries a free-text name.
    Custom,
}

impl CeremonyKind {
    /// Returns the canonical display label for this ceremony kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Engagement => "Engagement",
            Self::Mehendi => "Mehendi",
            Self::Haldi => "Haldi",
            Self::Sangeet => "Sangeet",
            Self::Wedding => "Wedding",
            Self::Reception => "Reception",
            Self::Custom => "Custom",
        }
    }

    /// Returns the wire discriminator string for this ceremony kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Engagement => "engagement",
            Self::Mehendi => "mehendi",
            Self::Haldi => "haldi",
            Self::Sangeet => "sangeet",
            Self::Wedding => "wedding",
            Self::Reception => "reception",
            Self::Custom => "custom",
        }
    }
}

/// Confirmation state of a vendor booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    /// Vendor has confirmed the booking.
    Confirmed,
    /// Booking requested, awaiting vendor confirmation.
    Pending,
    /// Vendor declined the booking.
    Declined,
}

impl VendorStatus {
    /// Returns the wire discriminator string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Declined => "declined",
        }
    }
}

/// A vendor booked for one ceremony.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorAssignment {
    /// Identity of the vendor, shared across ceremonies that book the
    /// same vendor.
    pub vendor_id: Uuid,
    /// Vendor display name.
    pub vendor_name: String,
    /// Confirmation state of this booking.
    pub status: VendorStatus,
}

/// One ceremony within a wedding timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubEvent {
    /// Unique sub-event identifier.
    pub id: Uuid,
    /// Canonical ceremony kind.
    pub kind: CeremonyKind,
    /// Free-text name; preferred over the canonical label when present.
    pub custom_name: Option<String>,
    /// Start of the ceremony time window.
    pub starts_at: DateTime<Utc>,
    /// End of the ceremony time window. Validated `>= starts_at` at the
    /// API boundary; the status engine treats violations as a zero-length
    /// interval.
    pub ends_at: DateTime<Utc>,
    /// Venue name, when booked.
    pub venue: Option<String>,
    /// Expected headcount for this ceremony.
    pub expected_guests: Option<u32>,
    /// Vendors booked for this ceremony.
    pub vendors: Vec<VendorAssignment>,
    /// Whether ground transport is required for this ceremony.
    pub transport_required: bool,
    /// Whether required transport has been arranged.
    pub transport_assigned: bool,
    /// Budget allocated to this ceremony, in minor currency units.
    pub allocated_budget: Option<u64>,
    /// Which portion of the guest list attends (e.g. `"family only"`).
    pub guest_subset: Option<String>,
}

impl SubEvent {
    /// Returns the name shown to organizers: the custom name when set,
    /// otherwise the canonical ceremony label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.custom_name.as_deref().unwrap_or(self.kind.label())
    }

    /// Returns the vendor IDs booked for this ceremony.
    #[must_use]
    pub fn vendor_ids(&self) -> Vec<Uuid> {
        self.vendors.iter().map(|v| v.vendor_id).collect()
    }
}
