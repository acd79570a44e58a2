//! # skymap-realtime
//!
//! Process-local presence tracking. Viewers ping with an opaque session id;
//! the tracker reports how many distinct sessions were seen inside a sliding
//! window. Nothing is persisted and the count resets on restart.

pub mod presence;

pub use presence::{PresenceStats, PresenceTracker};
