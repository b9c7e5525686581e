//! Planning service: orchestrates wedding operations and emits events.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::ceremony::SubEvent;
use crate::domain::guest::{Guest, RsvpStatus};
use crate::domain::planner_event::{PlannerEvent, TimelineChangeKind};
use crate::domain::table::SeatingTable;
use crate::domain::wedding_entry::{WeddingEntry, WeddingSummary};
use crate::domain::{EventBus, WeddingId, WeddingRegistry};
use crate::engine::budget::{self, BudgetSummary};
use crate::engine::seating::{self, SeatingPlan};
use crate::engine::status::{self, StatusPolicy, StatusReport};
use crate::error::PlannerError;

/// Budget roll-up together with the guest counts shown beside it.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverview {
    /// Budget aggregation and alerts.
    pub summary: BudgetSummary,
    /// Peak single-ceremony expected headcount.
    pub expected_attendance: u32,
    /// Guests who have accepted.
    pub accepted_headcount: usize,
}

/// Orchestration layer for all wedding planning operations.
///
/// Stateless coordinator: owns references to [`WeddingRegistry`] for state
/// and [`EventBus`] for event emission, plus the [`StatusPolicy`] the
/// timeline engine classifies under. Every mutation method follows the
/// pattern: acquire lock → mutate → update metadata → emit events →
/// return result.
///
/// The seating read-modify-write cycle (read occupancy → compute
/// placements → write assignments) runs entirely under one wedding write
/// lock, so concurrent auto-assignment runs for the same wedding cannot
/// double-book a table.
#[derive(Debug, Clone)]
pub struct PlanningService {
    registry: Arc<WeddingRegistry>,
    event_bus: EventBus,
    policy: StatusPolicy,
}

impl PlanningService {
    /// Creates a new `PlanningService`.
    #[must_use]
    pub fn new(registry: Arc<WeddingRegistry>, event_bus: EventBus, policy: StatusPolicy) -> Self {
        Self {
            registry,
            event_bus,
            policy,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a reference to the inner [`WeddingRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<WeddingRegistry> {
        &self.registry
    }

    // ── Wedding lifecycle ───────────────────────────────────────────────

    /// Creates a new wedding with an empty timeline, guest list, and
    /// table set.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the generated ID collides (should
    /// never happen with UUID v4).
    pub async fn create_wedding(
        &self,
        organization_id: Uuid,
        couple_name: &str,
        wedding_date: NaiveDate,
        total_budget: Option<u64>,
    ) -> Result<WeddingId, PlannerError> {
        let wedding_id = WeddingId::new();
        let entry = WeddingEntry::new(
            wedding_id,
            organization_id,
            couple_name.to_string(),
            wedding_date,
            total_budget,
        );
        self.registry.insert(entry).await?;

        let _ = self.event_bus.publish(PlannerEvent::WeddingCreated {
            wedding_id,
            organization_id,
            couple_name: couple_name.to_string(),
            timestamp: Utc::now(),
        });

        tracing::info!(%wedding_id, couple_name, "wedding created");
        Ok(wedding_id)
    }

    /// Removes a wedding from the registry.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding is not found.
    pub async fn remove_wedding(&self, wedding_id: WeddingId) -> Result<(), PlannerError> {
        let _entry = self.registry.remove(wedding_id).await?;

        let _ = self.event_bus.publish(PlannerEvent::WeddingRemoved {
            wedding_id,
            timestamp: Utc::now(),
        });

        tracing::info!(%wedding_id, "wedding removed");
        Ok(())
    }

    /// Returns summaries of all weddings, optionally filtered by owning
    /// organization.
    pub async fn list_weddings(&self, organization_filter: Option<Uuid>) -> Vec<WeddingSummary> {
        self.registry.list(organization_filter).await
    }

    // ── Timeline ────────────────────────────────────────────────────────

    /// Adds a ceremony to the wedding timeline.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidEventData`] when the event ends
    /// before it starts, or a [`PlannerError`] if the wedding is not
    /// found.
    pub async fn add_sub_event(
        &self,
        wedding_id: WeddingId,
        event: SubEvent,
    ) -> Result<Uuid, PlannerError> {
        validate_sub_event(&event)?;

        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let event_id = event.id;
        entry.sub_events.push(event);
        entry.last_modified_at = Utc::now();
        drop(entry);

        let _ = self.event_bus.publish(PlannerEvent::TimelineChanged {
            wedding_id,
            event_id,
            change: TimelineChangeKind::EventAdded,
            timestamp: Utc::now(),
        });

        tracing::info!(%wedding_id, %event_id, "sub-event added");
        Ok(event_id)
    }

    /// Replaces a ceremony's planning fields, keeping its identity.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidEventData`] on malformed timestamps,
    /// or a [`PlannerError`] if the wedding or sub-event is not found.
    pub async fn update_sub_event(
        &self,
        wedding_id: WeddingId,
        event_id: Uuid,
        mut event: SubEvent,
    ) -> Result<(), PlannerError> {
        event.id = event_id;
        validate_sub_event(&event)?;

        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let slot = entry
            .sub_events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or(PlannerError::EventNotFound(event_id))?;
        *slot = event;
        entry.last_modified_at = Utc::now();
        drop(entry);

        let _ = self.event_bus.publish(PlannerEvent::TimelineChanged {
            wedding_id,
            event_id,
            change: TimelineChangeKind::EventUpdated,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Removes a ceremony from the timeline.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding or sub-event is not
    /// found.
    pub async fn remove_sub_event(
        &self,
        wedding_id: WeddingId,
        event_id: Uuid,
    ) -> Result<(), PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let before = entry.sub_events.len();
        entry.sub_events.retain(|e| e.id != event_id);
        if entry.sub_events.len() == before {
            return Err(PlannerError::EventNotFound(event_id));
        }
        entry.last_modified_at = Utc::now();
        drop(entry);

        let _ = self.event_bus.publish(PlannerEvent::TimelineChanged {
            wedding_id,
            event_id,
            change: TimelineChangeKind::EventRemoved,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Returns the timeline with a fresh status classification for every
    /// ceremony. The status engine holds no state; every read
    /// re-classifies against the current sibling set.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding is not found.
    pub async fn timeline(
        &self,
        wedding_id: WeddingId,
    ) -> Result<Vec<(SubEvent, StatusReport)>, PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let entry = entry_lock.read().await;
        Ok(entry
            .sub_events
            .iter()
            .map(|e| (e.clone(), status::classify(e, &entry.sub_events, &self.policy)))
            .collect())
    }

    // ── Guests ──────────────────────────────────────────────────────────

    /// Adds a guest to the guest list.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding is not found.
    pub async fn add_guest(&self, wedding_id: WeddingId, guest: Guest) -> Result<Uuid, PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let guest_id = guest.id;
        entry.guests.push(guest);
        entry.last_modified_at = Utc::now();
        Ok(guest_id)
    }

    /// Updates a guest's RSVP state.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding or guest is not found.
    pub async fn set_rsvp(
        &self,
        wedding_id: WeddingId,
        guest_id: Uuid,
        rsvp: RsvpStatus,
    ) -> Result<(), PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let guest = entry
            .guests
            .iter_mut()
            .find(|g| g.id == guest_id)
            .ok_or(PlannerError::GuestNotFound(guest_id))?;
        guest.rsvp = rsvp;
        // A declined guest gives up any seat they held.
        if rsvp == RsvpStatus::Declined {
            guest.table_id = None;
            guest.seat_number = None;
        }
        entry.last_modified_at = Utc::now();
        drop(entry);

        let _ = self.event_bus.publish(PlannerEvent::RsvpChanged {
            wedding_id,
            guest_id,
            rsvp,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Removes a guest from the guest list.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding or guest is not found.
    pub async fn remove_guest(
        &self,
        wedding_id: WeddingId,
        guest_id: Uuid,
    ) -> Result<(), PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let before = entry.guests.len();
        entry.guests.retain(|g| g.id != guest_id);
        if entry.guests.len() == before {
            return Err(PlannerError::GuestNotFound(guest_id));
        }
        entry.last_modified_at = Utc::now();
        Ok(())
    }

    /// Returns the full guest list.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding is not found.
    pub async fn list_guests(&self, wedding_id: WeddingId) -> Result<Vec<Guest>, PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let entry = entry_lock.read().await;
        Ok(entry.guests.clone())
    }

    // ── Tables & seating ────────────────────────────────────────────────

    /// Adds a seating table.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidRequest`] when capacity is zero, or
    /// a [`PlannerError`] if the wedding is not found.
    pub async fn add_table(
        &self,
        wedding_id: WeddingId,
        table: SeatingTable,
    ) -> Result<Uuid, PlannerError> {
        if table.capacity == 0 {
            return Err(PlannerError::InvalidRequest(
                "table capacity must be greater than zero".to_string(),
            ));
        }

        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let table_id = table.id;
        entry.tables.push(table);
        entry.last_modified_at = Utc::now();
        Ok(table_id)
    }

    /// Removes a seating table and clears the assignments of any guests
    /// seated there.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding or table is not found.
    pub async fn remove_table(
        &self,
        wedding_id: WeddingId,
        table_id: Uuid,
    ) -> Result<(), PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;
        let before = entry.tables.len();
        entry.tables.retain(|t| t.id != table_id);
        if entry.tables.len() == before {
            return Err(PlannerError::TableNotFound(table_id));
        }
        for guest in entry.guests.iter_mut().filter(|g| g.table_id == Some(table_id)) {
            guest.table_id = None;
            guest.seat_number = None;
        }
        entry.last_modified_at = Utc::now();
        Ok(())
    }

    /// Returns every table together with its current occupancy.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding is not found.
    pub async fn list_tables(
        &self,
        wedding_id: WeddingId,
    ) -> Result<Vec<(SeatingTable, u32)>, PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let entry = entry_lock.read().await;
        Ok(entry
            .tables
            .iter()
            .map(|t| {
                let occupied = entry
                    .guests
                    .iter()
                    .filter(|g| g.table_id == Some(t.id))
                    .count();
                (t.clone(), u32::try_from(occupied).unwrap_or(u32::MAX))
            })
            .collect())
    }

    /// Runs the seating engine and applies every computed placement as one
    /// batch, all under the wedding's write lock.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::NoTablesAvailable`] when the wedding has no
    /// tables, or a [`PlannerError`] if the wedding is not found.
    pub async fn auto_assign_seating(
        &self,
        wedding_id: WeddingId,
    ) -> Result<SeatingPlan, PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let mut entry = entry_lock.write().await;

        let plan = seating::auto_assign(&entry.tables, &entry.guests)?;

        for placement in &plan.placements {
            if let Some(guest) = entry.guests.iter_mut().find(|g| g.id == placement.guest_id) {
                guest.table_id = Some(placement.table_id);
                guest.seat_number = Some(placement.seat_number);
            }
        }
        entry.reseat_count = entry.reseat_count.saturating_add(1);
        entry.last_modified_at = Utc::now();
        drop(entry);

        let _ = self.event_bus.publish(PlannerEvent::SeatingAssigned {
            wedding_id,
            assigned_count: plan.assigned_count,
            unplaced_families: plan.unplaced_families.clone(),
            timestamp: Utc::now(),
        });

        tracing::info!(
            %wedding_id,
            assigned = plan.assigned_count,
            unplaced = plan.unplaced_families.len(),
            "seating auto-assignment complete"
        );
        Ok(plan)
    }

    // ── Dashboard ───────────────────────────────────────────────────────

    /// Returns the budget roll-up plus headline guest counts.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError`] if the wedding is not found.
    pub async fn budget_overview(
        &self,
        wedding_id: WeddingId,
    ) -> Result<BudgetOverview, PlannerError> {
        let entry_lock = self.registry.get(wedding_id).await?;
        let entry = entry_lock.read().await;
        Ok(BudgetOverview {
            summary: budget::summarize(entry.total_budget, &entry.sub_events),
            expected_attendance: budget::expected_attendance(&entry.sub_events),
            accepted_headcount: budget::accepted_headcount(&entry.guests),
        })
    }
}

/// Fails fast on malformed timestamps: an event must not end before it
/// starts.
fn validate_sub_event(event: &SubEvent) -> Result<(), PlannerError> {
    if event.ends_at < event.starts_at {
        return Err(PlannerError::InvalidEventData(format!(
            "event '{}' ends before it starts",
            event.display_name()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ceremony::CeremonyKind;
    use crate::domain::table::{TableCategory, TableShape};
    use crate::engine::status::EventStatus;
    use chrono::TimeZone;

    fn make_service() -> PlanningService {
        let registry = Arc::new(WeddingRegistry::new());
        let event_bus = EventBus::new(1000);
        PlanningService::new(registry, event_bus, StatusPolicy::default())
    }

    async fn make_wedding(service: &PlanningService) -> WeddingId {
        let date = NaiveDate::from_ymd_opt(2026, 11, 21).unwrap_or_default();
        let result = service
            .create_wedding(Uuid::new_v4(), "Priya & Rohan", date, Some(1_000_000))
            .await;
        let Ok(id) = result else {
            panic!("wedding creation failed");
        };
        id
    }

    fn make_event(start_hour: u32, end_hour: u32) -> SubEvent {
        let at = |h| {
            Utc.with_ymd_and_hms(2026, 11, 20, h, 0, 0)
                .single()
                .unwrap_or_default()
        };
        SubEvent {
            id: Uuid::new_v4(),
            kind: CeremonyKind::Sangeet,
            custom_name: None,
            starts_at: at(start_hour),
            ends_at: at(end_hour),
            venue: Some("Lotus Gardens".to_string()),
            expected_guests: Some(100),
            vendors: vec![],
            transport_required: false,
            transport_assigned: false,
            allocated_budget: Some(100_000),
            guest_subset: Some("all".to_string()),
        }
    }

    fn make_guest(family: &str) -> Guest {
        Guest {
            id: Uuid::new_v4(),
            name: format!("{family} guest"),
            family: Some(family.to_string()),
            vip: false,
            elderly: false,
            rsvp: RsvpStatus::Accepted,
            table_id: None,
            seat_number: None,
        }
    }

    fn make_table(capacity: u32) -> SeatingTable {
        SeatingTable {
            id: Uuid::new_v4(),
            name: "T1".to_string(),
            capacity,
            shape: TableShape::Round,
            category: TableCategory::General,
        }
    }

    #[tokio::test]
    async fn create_wedding_emits_event() {
        let service = make_service();
        let mut rx = service.event_bus().subscribe();

        let _id = make_wedding(&service).await;

        let event = rx.recv().await;
        let Ok(event) = event else {
            panic!("expected event");
        };
        assert_eq!(event.event_type_str(), "wedding_created");
    }

    #[tokio::test]
    async fn add_sub_event_rejects_inverted_interval() {
        let service = make_service();
        let id = make_wedding(&service).await;

        let event = make_event(14, 12);
        let result = service.add_sub_event(id, event).await;
        assert!(matches!(result, Err(PlannerError::InvalidEventData(_))));
    }

    #[tokio::test]
    async fn timeline_classifies_overlap_as_conflict() {
        let service = make_service();
        let id = make_wedding(&service).await;

        let _ = service.add_sub_event(id, make_event(10, 13)).await;
        let _ = service.add_sub_event(id, make_event(12, 15)).await;

        let timeline = service.timeline(id).await;
        let Ok(timeline) = timeline else {
            panic!("timeline failed");
        };
        assert_eq!(timeline.len(), 2);
        assert!(
            timeline
                .iter()
                .all(|(_, report)| report.status == EventStatus::Conflict)
        );
    }

    #[tokio::test]
    async fn update_sub_event_keeps_identity() {
        let service = make_service();
        let id = make_wedding(&service).await;

        let Ok(event_id) = service.add_sub_event(id, make_event(10, 12)).await else {
            panic!("add failed");
        };

        let mut updated = make_event(16, 18);
        updated.venue = Some("Marigold Hall".to_string());
        let result = service.update_sub_event(id, event_id, updated).await;
        assert!(result.is_ok());

        let timeline = service.timeline(id).await.unwrap_or_default();
        assert_eq!(timeline.len(), 1);
        assert_eq!(
            timeline.first().map(|(e, _)| e.id),
            Some(event_id)
        );
    }

    #[tokio::test]
    async fn auto_assign_persists_placements() {
        let service = make_service();
        let id = make_wedding(&service).await;

        let _ = service.add_table(id, make_table(4)).await;
        let _ = service.add_guest(id, make_guest("Patel")).await;
        let _ = service.add_guest(id, make_guest("Patel")).await;

        let plan = service.auto_assign_seating(id).await;
        let Ok(plan) = plan else {
            panic!("auto-assign failed");
        };
        assert_eq!(plan.assigned_count, 2);

        let guests = service.list_guests(id).await.unwrap_or_default();
        assert!(guests.iter().all(|g| g.table_id.is_some()));

        // Re-running finds nothing left to place.
        let again = service.auto_assign_seating(id).await;
        let Ok(again) = again else {
            panic!("second run failed");
        };
        assert_eq!(again.assigned_count, 0);
    }

    #[tokio::test]
    async fn auto_assign_without_tables_fails() {
        let service = make_service();
        let id = make_wedding(&service).await;
        let _ = service.add_guest(id, make_guest("Patel")).await;

        let result = service.auto_assign_seating(id).await;
        assert!(matches!(result, Err(PlannerError::NoTablesAvailable)));
    }

    #[tokio::test]
    async fn declining_rsvp_clears_seat() {
        let service = make_service();
        let id = make_wedding(&service).await;

        let _ = service.add_table(id, make_table(2)).await;
        let guest = make_guest("Shah");
        let guest_id = guest.id;
        let _ = service.add_guest(id, guest).await;
        let _ = service.auto_assign_seating(id).await;

        let result = service.set_rsvp(id, guest_id, RsvpStatus::Declined).await;
        assert!(result.is_ok());

        let guests = service.list_guests(id).await.unwrap_or_default();
        let declined = guests.iter().find(|g| g.id == guest_id);
        assert!(declined.is_some_and(|g| g.table_id.is_none() && g.seat_number.is_none()));
    }

    #[tokio::test]
    async fn remove_table_clears_assignments() {
        let service = make_service();
        let id = make_wedding(&service).await;

        let table = make_table(4);
        let table_id = table.id;
        let _ = service.add_table(id, table).await;
        let _ = service.add_guest(id, make_guest("Rao")).await;
        let _ = service.auto_assign_seating(id).await;

        let result = service.remove_table(id, table_id).await;
        assert!(result.is_ok());

        let guests = service.list_guests(id).await.unwrap_or_default();
        assert!(guests.iter().all(|g| g.table_id.is_none()));
    }

    #[tokio::test]
    async fn zero_capacity_table_is_rejected() {
        let service = make_service();
        let id = make_wedding(&service).await;

        let result = service.add_table(id, make_table(0)).await;
        assert!(matches!(result, Err(PlannerError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn budget_overview_rolls_up() {
        let service = make_service();
        let id = make_wedding(&service).await;
        let _ = service.add_sub_event(id, make_event(10, 12)).await;

        let overview = service.budget_overview(id).await;
        let Ok(overview) = overview else {
            panic!("overview failed");
        };
        assert_eq!(overview.summary.total_allocated, 100_000);
        assert_eq!(overview.expected_attendance, 100);
    }

    #[tokio::test]
    async fn operations_on_unknown_wedding_fail() {
        let service = make_service();
        let id = WeddingId::new();

        assert!(service.timeline(id).await.is_err());
        assert!(service.auto_assign_seating(id).await.is_err());
        assert!(service.remove_wedding(id).await.is_err());
    }
}
