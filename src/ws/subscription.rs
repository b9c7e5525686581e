//! Per-connection subscription manager.
//!
//! Tracks which wedding IDs a WebSocket client is subscribed to and
//! provides server-side event filtering.

use std::collections::HashSet;

use crate::domain::WeddingId;

/// Manages the set of wedding subscriptions for a single WebSocket
/// connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Subscribed wedding IDs. If `subscribe_all` is true, this set is
    /// ignored.
    wedding_ids: HashSet<WeddingId>,
    /// Whether the client subscribes to all weddings (wildcard `"*"`).
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds wedding IDs to the subscription set. `"*"` enables the
    /// wildcard.
    pub fn subscribe(&mut self, ids: &[WeddingId], wildcard: bool) {
        if wildcard {
            self.subscribe_all = true;
        }
        for id in ids {
            self.wedding_ids.insert(*id);
        }
    }

    /// Removes wedding IDs from the subscription set.
    pub fn unsubscribe(&mut self, ids: &[WeddingId]) {
        for id in ids {
            self.wedding_ids.remove(id);
        }
    }

    /// Returns `true` if the given wedding ID matches the subscription
    /// filter.
    #[must_use]
    pub fn matches(&self, wedding_id: WeddingId) -> bool {
        self.subscribe_all || self.wedding_ids.contains(&wedding_id)
    }

    /// Returns the number of explicitly subscribed wedding IDs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.wedding_ids.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_matches_nothing() {
        let mgr = SubscriptionManager::new();
        assert!(!mgr.matches(WeddingId::new()));
    }

    #[test]
    fn subscribe_specific_wedding() {
        let mut mgr = SubscriptionManager::new();
        let id = WeddingId::new();
        mgr.subscribe(&[id], false);
        assert!(mgr.matches(id));
        assert!(!mgr.matches(WeddingId::new()));
    }

    #[test]
    fn wildcard_matches_everything() {
        let mut mgr = SubscriptionManager::new();
        mgr.subscribe(&[], true);
        assert!(mgr.matches(WeddingId::new()));
        assert!(mgr.matches(WeddingId::new()));
    }

    #[test]
    fn unsubscribe_removes_wedding() {
        let mut mgr = SubscriptionManager::new();
        let id = WeddingId::new();
        mgr.subscribe(&[id], false);
        assert!(mgr.matches(id));
        mgr.unsubscribe(&[id]);
        assert!(!mgr.matches(id));
    }

    #[test]
    fn count_tracks_explicit() {
        let mut mgr = SubscriptionManager::new();
        assert_eq!(mgr.count(), 0);
        mgr.subscribe(&[WeddingId::new(), WeddingId::new()], false);
        assert_eq!(mgr.count(), 2);
    }
}
