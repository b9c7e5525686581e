//! PostgreSQL implementation of the persistence layer.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{StoredEvent, WeddingSnapshot};
use crate::error::PlannerError;

/// PostgreSQL-backed persistence layer using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    /// Creates a new persistence layer with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends an event to the event log.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError::PersistenceError`] on database failure.
    pub async fn save_event(
        &self,
        wedding_id: Uuid,
        event_type: &str,
        payload: &serde_json::Value,
    ) -> Result<i64, PlannerError> {
        let row = sqlx::query_scalar::<_, i64>(
            "INSERT INTO events (wedding_id, event_type, payload) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(wedding_id)
        .bind(event_type)
        .bind(payload)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PlannerError::PersistenceError(e.to_string()))?;

        Ok(row)
    }

    /// Saves a wedding state snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError::PersistenceError`] on database failure.
    pub async fn save_snapshot(
        &self,
        wedding_id: Uuid,
        state_json: &serde_json::Value,
        metadata_json: &serde_json::Value,
    ) -> Result<i64, PlannerError> {
        let row = sqlx::query_scalar::<_, i64>(
            "INSERT INTO wedding_snapshots (wedding_id, state_json, metadata_json) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(wedding_id)
        .bind(state_json)
        .bind(metadata_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PlannerError::PersistenceError(e.to_string()))?;

        Ok(row)
    }

    /// Loads the latest snapshot for each wedding using `DISTINCT ON`.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError::PersistenceError`] on database failure.
    pub async fn load_latest_snapshots(&self) -> Result<Vec<WeddingSnapshot>, PlannerError> {
        let rows = sqlx::query_as::<_, (i64, Uuid, serde_json::Value, serde_json::Value, DateTime<Utc>)>(
            "SELECT DISTINCT ON (wedding_id) id, wedding_id, state_json, metadata_json, snapshot_at \
             FROM wedding_snapshots ORDER BY wedding_id, snapshot_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PlannerError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(
                |(id, wedding_id, state_json, metadata_json, snapshot_at)| WeddingSnapshot {
                    id,
                    wedding_id,
                    state_json,
                    metadata_json,
                    snapshot_at,
                },
            )
            .collect())
    }

    /// Loads events after the given timestamp, optionally filtered by
    /// wedding ID.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError::PersistenceError`] on database failure.
    pub async fn load_events_after(
        &self,
        after: DateTime<Utc>,
        wedding_id: Option<Uuid>,
    ) -> Result<Vec<StoredEvent>, PlannerError> {
        let rows = if let Some(wid) = wedding_id {
            sqlx::query_as::<_, (i64, Uuid, String, serde_json::Value, DateTime<Utc>)>(
                "SELECT id, wedding_id, event_type, payload, created_at FROM events \
                 WHERE created_at > $1 AND wedding_id = $2 ORDER BY created_at ASC",
            )
            .bind(after)
            .bind(wid)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, (i64, Uuid, String, serde_json::Value, DateTime<Utc>)>(
                "SELECT id, wedding_id, event_type, payload, created_at FROM events \
                 WHERE created_at > $1 ORDER BY created_at ASC",
            )
            .bind(after)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| PlannerError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(
                |(id, wedding_id, event_type, payload, created_at)| StoredEvent {
                    id,
                    wedding_id,
                    event_type,
                    payload,
                    created_at,
                },
            )
            .collect())
    }

    /// Deletes snapshots older than the given number of days.
    ///
    /// # Errors
    ///
    /// Returns a [`PlannerError::PersistenceError`] on database failure.
    pub async fn delete_old_snapshots(&self, before_days: u64) -> Result<u64, PlannerError> {
        let cutoff =
            Utc::now() - chrono::Duration::days(i64::try_from(before_days).unwrap_or(i64::MAX));

        let result = sqlx::query("DELETE FROM wedding_snapshots WHERE snapshot_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| PlannerError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
