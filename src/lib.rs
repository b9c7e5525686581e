//! # utsav-gateway
//!
//! REST API and WebSocket gateway for multi-ceremony wedding planning.
//!
//! This crate manages weddings for one or more organizations: each wedding
//! holds a timeline of ceremony sub-events (engagement, mehendi, haldi,
//! sangeet, wedding, reception), a guest list with RSVP state and family
//! grouping, and a set of seating tables. All planning mathematics —
//! timeline conflict classification, greedy family-atomic seating, budget
//! roll-ups — live in pure functions under [`engine`]; the rest of the
//! crate is a coordination layer.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── PlanningService (service/)
//!     ├── EventBus (domain/)
//!     │
//!     ├── WeddingRegistry (domain/)
//!     ├── Planning engines (engine/)
//!     │
//!     └── PostgreSQL Persistence
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod service;
pub mod ws;
