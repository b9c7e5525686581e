//! Background tasks feeding the persistence layer.
//!
//! Two detached tasks bridge the in-memory world to PostgreSQL: the event
//! recorder drains the [`EventBus`] into the event log, and the snapshot
//! task periodically serializes every wedding's planning state. Both are
//! best-effort: a database failure is logged and the in-memory service
//! keeps running.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use super::postgres::PostgresPersistence;
use crate::domain::{PlannerEvent, WeddingRegistry};

/// Spawns a task that appends every bus event to the event log.
pub fn spawn_event_recorder(
    persistence: PostgresPersistence,
    mut event_rx: broadcast::Receiver<PlannerEvent>,
) {
    tokio::spawn(async move {
        loop {
            match event_rx.recv().await {
                Ok(event) => {
                    let wedding_id = *event.wedding_id().as_uuid();
                    let event_type = event.event_type_str();
                    let payload = serde_json::to_value(&event).unwrap_or_default();
                    if let Err(e) = persistence.save_event(wedding_id, event_type, &payload).await {
                        tracing::warn!(error = %e, event_type, "failed to persist event");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(lagged = n, "event recorder lagged behind event bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        tracing::debug!("event recorder stopped");
    });
}

/// Spawns a task that snapshots every wedding's planning state on a fixed
/// interval and prunes snapshots past the retention window.
pub fn spawn_snapshot_task(
    persistence: PostgresPersistence,
    registry: Arc<WeddingRegistry>,
    interval_secs: u64,
    cleanup_after_days: u64,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
        loop {
            ticker.tick().await;

            for summary in registry.list(None).await {
                let Ok(entry_lock) = registry.get(summary.wedding_id).await else {
                    continue;
                };
                let entry = entry_lock.read().await;
                let state_json = serde_json::json!({
                    "sub_events": entry.sub_events,
                    "guests": entry.guests,
                    "tables": entry.tables,
                });
                let metadata_json = serde_json::json!({
                    "organization_id": entry.organization_id,
                    "couple_name": entry.couple_name,
                    "wedding_date": entry.wedding_date,
                    "total_budget": entry.total_budget,
                    "reseat_count": entry.reseat_count,
                    "created_at": entry.created_at,
                    "last_modified_at": entry.last_modified_at,
                });
                let wedding_id = *entry.wedding_id.as_uuid();
                drop(entry);

                if let Err(e) = persistence
                    .save_snapshot(wedding_id, &state_json, &metadata_json)
                    .await
                {
                    tracing::warn!(error = %e, %wedding_id, "failed to snapshot wedding");
                }
            }

            if cleanup_after_days > 0 {
                match persistence.delete_old_snapshots(cleanup_after_days).await {
                    Ok(deleted) if deleted > 0 => {
                        tracing::info!(deleted, "pruned old wedding snapshots");
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!(error = %e, "snapshot cleanup failed"),
                }
            }
        }
    });
}
