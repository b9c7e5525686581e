//! Timeline status engine.
//!
//! Classifies each ceremony sub-event as ready, needs-attention, or
//! in-conflict by checking time-interval overlaps and shared-vendor buffer
//! violations against every sibling on the same wedding timeline.
//!
//! The engine is a pure function over snapshots: it is invoked fresh on
//! every read and persists nothing. Complexity is O(n²) in the number of
//! siblings, which stays trivial for human-curated ceremony lists
//! (typically under 20).

use chrono::Duration;
use serde::Serialize;

use crate::domain::ceremony::{SubEvent, VendorStatus};

/// Classification of one sub-event relative to its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Fully planned: no conflicts, no open issues.
    Ready,
    /// No conflicts, but at least one planning gap remains.
    Attention,
    /// Overlaps a sibling or violates a shared-vendor buffer.
    Conflict,
}

/// How to treat two events that share an exact boundary instant
/// (one ends at the very moment the other starts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Back-to-back ceremonies are legitimate: a shared instant is not an
    /// overlap. Intervals compare with closed-open semantics.
    BackToBackAllowed,
    /// A shared instant counts as an overlap.
    Strict,
}

/// Tunable knobs for timeline classification.
#[derive(Debug, Clone)]
pub struct StatusPolicy {
    /// Minimum idle gap required between two bookings of the same vendor,
    /// covering travel and reset time.
    pub vendor_buffer: Duration,
    /// Boundary-instant handling for overlap detection.
    pub boundary: BoundaryPolicy,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            vendor_buffer: Duration::minutes(120),
            boundary: BoundaryPolicy::BackToBackAllowed,
        }
    }
}

impl StatusPolicy {
    /// Creates a policy with the given vendor buffer in minutes and the
    /// default boundary handling.
    #[must_use]
    pub fn with_buffer_minutes(minutes: i64) -> Self {
        Self {
            vendor_buffer: Duration::minutes(minutes),
            ..Self::default()
        }
    }
}

/// Result of classifying one sub-event.
///
/// The string lists are intended for direct display, not machine parsing.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Final classification.
    pub status: EventStatus,
    /// Planning gaps. Empty whenever any conflict was recorded: conflicts
    /// short-circuit issue evaluation.
    pub issues: Vec<String>,
    /// Scheduling and vendor-buffer conflicts against siblings.
    pub conflicts: Vec<String>,
}

/// Classifies `event` against the full set of sibling sub-events of the
/// same wedding (the collection may include `event` itself; it is skipped
/// by ID).
///
/// Conflicts are evaluated first and accumulated across all siblings. Any
/// conflict forces [`EventStatus::Conflict`] and skips issue evaluation.
/// Issue checks then cover guest subset, vendor confirmation, transport,
/// budget, and venue.
#[must_use]
pub fn classify(event: &SubEvent, all_events: &[SubEvent], policy: &StatusPolicy) -> StatusReport {
    let conflicts = detect_conflicts(event, all_events, policy);
    if !conflicts.is_empty() {
        return StatusReport {
            status: EventStatus::Conflict,
            issues: Vec::new(),
            conflicts,
        };
    }

    let issues = detect_issues(event);
    let status = if issues.is_empty() {
        EventStatus::Ready
    } else {
        EventStatus::Attention
    };
    StatusReport {
        status,
        issues,
        conflicts,
    }
}

/// Accumulates overlap and vendor-buffer conflicts against every sibling.
fn detect_conflicts(event: &SubEvent, all_events: &[SubEvent], policy: &StatusPolicy) -> Vec<String> {
    let mut conflicts = Vec::new();

    for other in all_events.iter().filter(|o| o.id != event.id) {
        if intervals_overlap(event, other, policy.boundary) {
            conflicts.push(format!("Time overlap with {}", other.display_name()));
        }

        let shared = shared_vendor_names(event, other);
        if !shared.is_empty() && vendor_gap(event, other) < policy.vendor_buffer {
            conflicts.push(format!(
                "Insufficient buffer time for shared vendor(s) {} with {}",
                shared.join(", "),
                other.display_name()
            ));
        }
    }

    conflicts
}

/// Closed-open interval overlap: `[s1,e1)` and `[s2,e2)` overlap iff
/// `s1 < e2 && s2 < e1`. A zero-length interval overlaps nothing under
/// this rule. [`BoundaryPolicy::Strict`] widens the comparison so a
/// shared boundary instant counts.
fn intervals_overlap(a: &SubEvent, b: &SubEvent, boundary: BoundaryPolicy) -> bool {
    match boundary {
        BoundaryPolicy::BackToBackAllowed => a.starts_at < b.ends_at && b.starts_at < a.ends_at,
        BoundaryPolicy::Strict => a.starts_at <= b.ends_at && b.starts_at <= a.ends_at,
    }
}

/// Names of vendors booked on both events.
fn shared_vendor_names(a: &SubEvent, b: &SubEvent) -> Vec<String> {
    a.vendors
        .iter()
        .filter(|va| b.vendors.iter().any(|vb| vb.vendor_id == va.vendor_id))
        .map(|va| va.vendor_name.clone())
        .collect()
}

/// Gap between the end of whichever event finishes first and the start of
/// whichever starts second. Negative when the events overlap, so an
/// overlapping shared-vendor pair always violates the buffer as well.
fn vendor_gap(a: &SubEvent, b: &SubEvent) -> Duration {
    if a.ends_at <= b.ends_at {
        b.starts_at - a.ends_at
    } else {
        a.starts_at - b.ends_at
    }
}

/// Collects planning gaps for a conflict-free event.
fn detect_issues(event: &SubEvent) -> Vec<String> {
    let mut issues = Vec::new();

    if event.guest_subset.is_none() || event.expected_guests.unwrap_or(0) == 0 {
        issues.push("Guest subset not defined".to_string());
    }

    if event.vendors.is_empty() {
        issues.push("No vendors assigned".to_string());
    } else {
        let unconfirmed = event
            .vendors
            .iter()
            .filter(|v| !matches!(v.status, VendorStatus::Confirmed))
            .count();
        if unconfirmed > 0 {
            issues.push(format!("{unconfirmed} vendor(s) not confirmed"));
        }
    }

    if event.transport_required && !event.transport_assigned {
        issues.push("Transport not assigned".to_string());
    }

    if event.allocated_budget.unwrap_or(0) == 0 {
        issues.push("Budget not set".to_string());
    }

    if event.venue.is_none() {
        issues.push("Venue not specified".to_string());
    }

    issues
}
