//! Launch site use cases.

pub mod service;

pub use service::{LaunchSiteList, LaunchSiteService, NAME_MAX_CHARS};
