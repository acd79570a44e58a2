//! # skymap-service
//!
//! Use cases for the map: normalize client input, enforce the data rules,
//! and persist through a shared [`skymap_storage::MarkerStore`].
//!
//! Services follow constructor injection; the store is handed in as an
//! `Arc<dyn MarkerStore>` chosen at startup.

pub mod launch_site;
pub mod target;

pub use launch_site::{LaunchSiteList, LaunchSiteService};
pub use target::{TargetList, TargetService};
