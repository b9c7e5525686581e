//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventBus;
use crate::service::PlanningService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Planning service for all business logic.
    pub planning_service: Arc<PlanningService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
    /// Suggested hotels for guest accommodation, from configuration.
    pub default_hotels: Arc<Vec<String>>,
}
