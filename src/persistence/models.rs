//! Database models for events and snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored event row from the `events` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEvent {
    /// Auto-increment row ID.
    pub id: i64,
    /// Wedding that generated the event.
    pub wedding_id: Uuid,
    /// Event type discriminator (e.g. `"seating_assigned"`).
    pub event_type: String,
    /// JSONB payload with event-specific data.
    pub payload: serde_json::Value,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A wedding snapshot row from the `wedding_snapshots` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingSnapshot {
    /// Auto-increment row ID.
    pub id: i64,
    /// Wedding that was snapshotted.
    pub wedding_id: Uuid,
    /// Full planning state (timeline, guests, tables) as JSONB.
    pub state_json: serde_json::Value,
    /// Operational metadata (counters, timestamps) as JSONB.
    pub metadata_json: serde_json::Value,
    /// Snapshot timestamp.
    pub snapshot_at: DateTime<Utc>,
}
