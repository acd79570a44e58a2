//! # skymap-entity
//!
//! Domain entity models for SkyMap. `Target` and `LaunchSite` are stored
//! verbatim in the JSON documents and map one-to-one onto their PostgreSQL
//! rows (`sqlx::FromRow`). The `*Draft` types are the client-supplied
//! halves of those records before the server normalizes them.

pub mod launch_site;
pub mod number;
pub mod target;

pub use launch_site::{LaunchSite, LaunchSiteDraft};
pub use target::{Target, TargetDraft};
