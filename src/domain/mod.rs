//! Domain layer: core types, wedding registry, and event system.
//!
//! This module contains the server-side domain model including wedding
//! identity, ceremony sub-events, guests, seating tables, the event bus
//! for broadcasting state changes, and the wedding registry for
//! concurrent aggregate storage.

pub mod ceremony;
pub mod event_bus;
pub mod guest;
pub mod planner_event;
pub mod table;
pub mod wedding_entry;
pub mod wedding_id;
pub mod wedding_registry;

pub use ceremony::{CeremonyKind, SubEvent, VendorAssignment, VendorStatus};
pub use event_bus::EventBus;
pub use guest::{Guest, RsvpStatus};
pub use planner_event::PlannerEvent;
pub use table::{SeatingTable, TableCategory, TableShape};
pub use wedding_entry::WeddingEntry;
pub use wedding_id::WeddingId;
pub use wedding_registry::WeddingRegistry;
