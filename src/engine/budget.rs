//! Budget and guest-count roll-ups.
//!
//! Arithmetic aggregation over the ceremony timeline plus threshold-based
//! alert generation for the planning dashboard. Pure functions; all
//! amounts are minor currency units.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::ceremony::SubEvent;
use crate::domain::guest::{Guest, RsvpStatus};

/// Alert when allocations reach this share of the total budget.
const UTILIZATION_WARN_PCT: u64 = 90;

/// Budget allocated to one ceremony.
#[derive(Debug, Clone, Serialize)]
pub struct CeremonyAllocation {
    /// Sub-event identifier.
    pub event_id: Uuid,
    /// Display name of the ceremony.
    pub name: String,
    /// Allocated amount, zero when unset.
    pub allocated: u64,
}

/// Aggregated budget state for one wedding.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetSummary {
    /// Total wedding budget, when set.
    pub total_budget: Option<u64>,
    /// Sum of per-ceremony allocations.
    pub total_allocated: u64,
    /// Budget left to allocate; `None` when no total budget is set, zero
    /// when over-allocated.
    pub remaining: Option<u64>,
    /// Per-ceremony breakdown in timeline order.
    pub allocations: Vec<CeremonyAllocation>,
    /// Ceremonies with no budget allocated.
    pub unallocated_events: usize,
    /// Threshold alerts for direct display.
    pub alerts: Vec<String>,
}

/// Rolls up per-ceremony allocations against the total budget and
/// generates threshold alerts: over-allocation, and a warning at 90 %
/// utilization.
#[must_use]
pub fn summarize(total_budget: Option<u64>, sub_events: &[SubEvent]) -> BudgetSummary {
    let allocations: Vec<CeremonyAllocation> = sub_events
        .iter()
        .map(|e| CeremonyAllocation {
            event_id: e.id,
            name: e.display_name().to_string(),
            allocated: e.allocated_budget.unwrap_or(0),
        })
        .collect();

    let total_allocated: u64 = allocations.iter().map(|a| a.allocated).sum();
    let unallocated_events = allocations.iter().filter(|a| a.allocated == 0).count();

    let mut alerts = Vec::new();
    let remaining = match total_budget {
        Some(total) => {
            if total_allocated > total {
                alerts.push(format!(
                    "Budget over-allocated by {}",
                    total_allocated - total
                ));
            } else if total > 0
                && u128::from(total_allocated) * 100
                    >= u128::from(total) * u128::from(UTILIZATION_WARN_PCT)
            {
                alerts.push(format!(
                    "Budget utilization at {}%",
                    u128::from(total_allocated) * 100 / u128::from(total)
                ));
            }
            Some(total.saturating_sub(total_allocated))
        }
        None => {
            if total_allocated > 0 {
                alerts.push("Ceremony budgets allocated but no total budget set".to_string());
            }
            None
        }
    };

    if unallocated_events > 0 {
        alerts.push(format!(
            "{unallocated_events} ceremonies have no budget allocation"
        ));
    }

    BudgetSummary {
        total_budget,
        total_allocated,
        remaining,
        allocations,
        unallocated_events,
        alerts,
    }
}

/// Peak expected attendance across the timeline: the largest single
/// ceremony headcount, since the same guests attend multiple ceremonies.
#[must_use]
pub fn expected_attendance(sub_events: &[SubEvent]) -> u32 {
    sub_events
        .iter()
        .filter_map(|e| e.expected_guests)
        .max()
        .unwrap_or(0)
}

/// Number of guests who have accepted.
#[must_use]
pub fn accepted_headcount(guests: &[Guest]) -> usize {
    guests
        .iter()
        .filter(|g| g.rsvp == RsvpStatus::Accepted)
        .count()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ceremony::CeremonyKind;
    use chrono::Utc;

    fn event_with_budget(budget: Option<u64>) -> SubEvent {
        SubEvent {
            id: Uuid::new_v4(),
            kind: CeremonyKind::Sangeet,
            custom_name: None,
            starts_at: Utc::now(),
            ends_at: Utc::now(),
            venue: None,
            expected_guests: None,
            vendors: vec![],
            transport_required: false,
            transport_assigned: false,
            allocated_budget: budget,
            guest_subset: None,
        }
    }

    #[test]
    fn rolls_up_allocations() {
        let events = vec![
            event_with_budget(Some(300_000)),
            event_with_budget(Some(200_000)),
            event_with_budget(None),
        ];
        let summary = summarize(Some(1_000_000), &events);
        assert_eq!(summary.total_allocated, 500_000);
        assert_eq!(summary.remaining, Some(500_000));
        assert_eq!(summary.unallocated_events, 1);
    }

    #[test]
    fn over_allocation_raises_alert() {
        let events = vec![event_with_budget(Some(1_200_000))];
        let summary = summarize(Some(1_000_000), &events);
        assert_eq!(summary.remaining, Some(0));
        assert!(summary.alerts.iter().any(|a| a.contains("over-allocated by 200000")));
    }

    #[test]
    fn utilization_warning_at_ninety_percent() {
        let events = vec![event_with_budget(Some(900_000))];
        let summary = summarize(Some(1_000_000), &events);
        assert!(summary.alerts.iter().any(|a| a.contains("90%")));
    }

    #[test]
    fn no_warning_below_threshold() {
        let events = vec![event_with_budget(Some(500_000))];
        let summary = summarize(Some(1_000_000), &events);
        assert!(summary.alerts.is_empty());
    }

    #[test]
    fn missing_total_budget_with_allocations_alerts() {
        let events = vec![event_with_budget(Some(100_000))];
        let summary = summarize(None, &events);
        assert_eq!(summary.remaining, None);
        assert!(!summary.alerts.is_empty());
    }

    #[test]
    fn expected_attendance_is_peak_not_sum() {
        let mut a = event_with_budget(None);
        a.expected_guests = Some(150);
        let mut b = event_with_budget(None);
        b.expected_guests = Some(80);
        assert_eq!(expected_attendance(&[a, b]), 150);
    }

    #[test]
    fn accepted_headcount_counts_only_accepted() {
        use crate::domain::guest::Guest;
        let make = |rsvp| Guest {
            id: Uuid::new_v4(),
            name: "G".to_string(),
            family: None,
            vip: false,
            elderly: false,
            rsvp,
            table_id: None,
            seat_number: None,
        };
        let guests = vec![
            make(RsvpStatus::Accepted),
            make(RsvpStatus::Pending),
            make(RsvpStatus::Declined),
        ];
        assert_eq!(accepted_headcount(&guests), 1);
    }
}
