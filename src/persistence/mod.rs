//! Persistence layer: PostgreSQL event log and wedding snapshots.
//!
//! Provides durable storage of planner events and periodic wedding state
//! snapshots. The concrete implementation uses `sqlx::PgPool` for async
//! PostgreSQL access. The in-memory registry remains the source of truth;
//! persistence is a recovery and audit surface.

pub mod models;
pub mod postgres;
pub mod recorder;
