//! Sliding-window presence.

pub mod tracker;

pub use tracker::{PresenceStats, PresenceTracker};
