//! Concurrent wedding storage with per-wedding fine-grained locking.
//!
//! [`WeddingRegistry`] stores all active weddings in a `HashMap` where
//! each entry is individually protected by a [`tokio::sync::RwLock`].
//! This allows concurrent reads on the same wedding and concurrent writes
//! on different weddings, while serializing writes to one wedding — which
//! is what keeps the seating read-modify-write cycle race-free.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::WeddingId;
use super::wedding_entry::{WeddingEntry, WeddingSummary};
use crate::error::PlannerError;

/// Central store for all active weddings.
///
/// Uses a `RwLock<HashMap<...>>` for the outer map and per-entry
/// `Arc<RwLock<WeddingEntry>>` for fine-grained per-wedding locking.
///
/// # Concurrency
///
/// - Multiple threads may read the same wedding concurrently.
/// - Writes to different weddings are concurrent.
/// - Writes to the same wedding are serialized.
#[derive(Debug)]
pub struct WeddingRegistry {
    weddings: RwLock<HashMap<WeddingId, Arc<RwLock<WeddingEntry>>>>,
}

impl WeddingRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weddings: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a new wedding entry into the registry.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidRequest`] if a wedding with the same
    /// ID already exists (should never happen with UUID v4).
    pub async fn insert(&self, entry: WeddingEntry) -> Result<WeddingId, PlannerError> {
        let wedding_id = entry.wedding_id;
        let mut map = self.weddings.write().await;
        if map.contains_key(&wedding_id) {
            return Err(PlannerError::InvalidRequest(format!(
                "wedding {wedding_id} already exists"
            )));
        }
        map.insert(wedding_id, Arc::new(RwLock::new(entry)));
        Ok(wedding_id)
    }

    /// Returns a shared reference to the wedding entry behind its
    /// per-wedding lock.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::WeddingNotFound`] if no wedding with the
    /// given ID exists.
    pub async fn get(
        &self,
        wedding_id: WeddingId,
    ) -> Result<Arc<RwLock<WeddingEntry>>, PlannerError> {
        let map = self.weddings.read().await;
        map.get(&wedding_id)
            .cloned()
            .ok_or(PlannerError::WeddingNotFound(*wedding_id.as_uuid()))
    }

    /// Removes a wedding from the registry, returning its entry.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::WeddingNotFound`] if no wedding with the
    /// given ID exists.
    pub async fn remove(&self, wedding_id: WeddingId) -> Result<WeddingEntry, PlannerError> {
        let mut map = self.weddings.write().await;
        let arc = map
            .remove(&wedding_id)
            .ok_or(PlannerError::WeddingNotFound(*wedding_id.as_uuid()))?;
        // Unwrap the Arc — we just removed it so we hold the only strong ref
        // after the map write lock is released. Use `try_unwrap` to be safe.
        let entry = Arc::try_unwrap(arc)
            .map_err(|_| {
                PlannerError::Internal("wedding entry still referenced elsewhere".to_string())
            })?
            .into_inner();
        Ok(entry)
    }

    /// Returns summaries of all weddings, optionally filtered by owning
    /// organization.
    pub async fn list(&self, organization_filter: Option<Uuid>) -> Vec<WeddingSummary> {
        let map = self.weddings.read().await;
        let mut summaries = Vec::with_capacity(map.len());
        for entry_lock in map.values() {
            let entry = entry_lock.read().await;
            if let Some(filter) = organization_filter
                && entry.organization_id != filter
            {
                continue;
            }
            summaries.push(WeddingSummary::from(&*entry));
        }
        summaries
    }

    /// Returns the number of weddings in the registry.
    pub async fn len(&self) -> usize {
        self.weddings.read().await.len()
    }

    /// Returns `true` if the registry contains no weddings.
    pub async fn is_empty(&self) -> bool {
        self.weddings.read().await.is_empty()
    }
}

impl Default for WeddingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_entry(organization_id: Uuid) -> WeddingEntry {
        let date = NaiveDate::from_ymd_opt(2026, 11, 21).unwrap_or_default();
        WeddingEntry::new(
            WeddingId::new(),
            organization_id,
            "Priya & Rohan".to_string(),
            date,
            Some(5_000_000),
        )
    }

    #[tokio::test]
    async fn insert_and_get() {
        let registry = WeddingRegistry::new();
        let entry = make_entry(Uuid::new_v4());
        let id = entry.wedding_id;

        let result = registry.insert(entry).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap_or_default(), id);

        let fetched = registry.get(id).await;
        assert!(fetched.is_ok());
    }

    #[tokio::test]
    async fn get_nonexistent_returns_error() {
        let registry = WeddingRegistry::new();
        let result = registry.get(WeddingId::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn remove_returns_entry() {
        let registry = WeddingRegistry::new();
        let entry = make_entry(Uuid::new_v4());
        let id = entry.wedding_id;

        let _ = registry.insert(entry).await;
        let removed = registry.remove(id).await;
        assert!(removed.is_ok());

        // Now it should be gone
        let result = registry.get(id).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn remove_nonexistent_returns_error() {
        let registry = WeddingRegistry::new();
        let result = registry.remove(WeddingId::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn list_returns_all() {
        let registry = WeddingRegistry::new();
        let org = Uuid::new_v4();
        let _ = registry.insert(make_entry(org)).await;
        let _ = registry.insert(make_entry(org)).await;

        let list = registry.list(None).await;
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn list_filters_by_organization() {
        let registry = WeddingRegistry::new();
        let org = Uuid::new_v4();
        let _ = registry.insert(make_entry(org)).await;

        let matched = registry.list(Some(org)).await;
        assert_eq!(matched.len(), 1);

        let unmatched = registry.list(Some(Uuid::new_v4())).await;
        assert!(unmatched.is_empty());
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let registry = WeddingRegistry::new();
        assert!(registry.is_empty().await);
        assert_eq!(registry.len().await, 0);

        let _ = registry.insert(make_entry(Uuid::new_v4())).await;
        assert!(!registry.is_empty().await);
        assert_eq!(registry.len().await, 1);
    }
}
