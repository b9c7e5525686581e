//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` pushes planning events — timeline
//! changes, RSVP updates, seating runs — to subscribed clients in real
//! time.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;
