//! Ceremony sub-event DTOs and timeline responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ceremony::{SubEvent, VendorAssignment};
use crate::engine::status::StatusReport;

/// Vendor assignment as carried in sub-event requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VendorAssignmentDto {
    /// Vendor identity; generated when omitted on create.
    #[serde(default)]
    pub vendor_id: Option<Uuid>,
    /// Vendor display name.
    pub vendor_name: String,
    /// Confirmation state discriminator: `confirmed`, `pending`, or
    /// `declined`.
    pub status: String,
}

impl From<&VendorAssignment> for VendorAssignmentDto {
    fn from(assignment: &VendorAssignment) -> Self {
        Self {
            vendor_id: Some(assignment.vendor_id),
            vendor_name: assignment.vendor_name.clone(),
            status: assignment.status.as_str().to_string(),
        }
    }
}

/// Request body for creating or updating a ceremony sub-event.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubEventRequest {
    /// Ceremony kind discriminator: `engagement`, `mehendi`, `haldi`,
    /// `sangeet`, `wedding`, `reception`, or `custom`.
    pub kind: String,
    /// Free-text name; preferred over the canonical label when present.
    #[serde(default)]
    pub custom_name: Option<String>,
    /// Start of the ceremony time window.
    pub starts_at: DateTime<Utc>,
    /// End of the ceremony time window; must not precede the start.
    pub ends_at: DateTime<Utc>,
    /// Venue name, when booked.
    #[serde(default)]
    pub venue: Option<String>,
    /// Expected headcount for this ceremony.
    #[serde(default)]
    pub expected_guests: Option<u32>,
    /// Vendors booked for this ceremony.
    #[serde(default)]
    pub vendors: Vec<VendorAssignmentDto>,
    /// Whether ground transport is required.
    #[serde(default)]
    pub transport_required: bool,
    /// Whether required transport has been arranged.
    #[serde(default)]
    pub transport_assigned: bool,
    /// Budget allocated to this ceremony, in minor currency units.
    #[serde(default)]
    pub allocated_budget: Option<u64>,
    /// Which portion of the guest list attends.
    #[serde(default)]
    pub guest_subset: Option<String>,
}

/// One ceremony as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubEventResponse {
    /// Sub-event identifier.
    pub id: Uuid,
    /// Ceremony kind discriminator.
    pub kind: String,
    /// Display name: the custom name when set, else the canonical label.
    pub name: String,
    /// Start of the ceremony time window.
    pub starts_at: DateTime<Utc>,
    /// End of the ceremony time window.
    pub ends_at: DateTime<Utc>,
    /// Venue name, when booked.
    pub venue: Option<String>,
    /// Expected headcount.
    pub expected_guests: Option<u32>,
    /// Vendors booked for this ceremony.
    pub vendors: Vec<VendorAssignmentDto>,
    /// Whether ground transport is required.
    pub transport_required: bool,
    /// Whether required transport has been arranged.
    pub transport_assigned: bool,
    /// Budget allocated to this ceremony.
    pub allocated_budget: Option<u64>,
    /// Which portion of the guest list attends.
    pub guest_subset: Option<String>,
}

impl From<&SubEvent> for SubEventResponse {
    fn from(event: &SubEvent) -> Self {
        Self {
            id: event.id,
            kind: event.kind.as_str().to_string(),
            name: event.display_name().to_string(),
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            venue: event.venue.clone(),
            expected_guests: event.expected_guests,
            vendors: event.vendors.iter().map(VendorAssignmentDto::from).collect(),
            transport_required: event.transport_required,
            transport_assigned: event.transport_assigned,
            allocated_budget: event.allocated_budget,
            guest_subset: event.guest_subset.clone(),
        }
    }
}

/// One timeline row: a ceremony plus its fresh status classification.
#[derive(Debug, Serialize, ToSchema)]
pub struct TimelineEntry {
    /// The ceremony.
    pub event: SubEventResponse,
    /// Status discriminator: `ready`, `attention`, or `conflict`.
    pub status: String,
    /// Planning gaps; empty when any conflict was recorded.
    pub issues: Vec<String>,
    /// Scheduling and vendor-buffer conflicts.
    pub conflicts: Vec<String>,
}

impl TimelineEntry {
    /// Builds a timeline row from a ceremony and its status report.
    #[must_use]
    pub fn new(event: &SubEvent, report: StatusReport) -> Self {
        let status = match report.status {
            crate::engine::status::EventStatus::Ready => "ready",
            crate::engine::status::EventStatus::Attention => "attention",
            crate::engine::status::EventStatus::Conflict => "conflict",
        };
        Self {
            event: SubEventResponse::from(event),
            status: status.to_string(),
            issues: report.issues,
            conflicts: report.conflicts,
        }
    }
}
