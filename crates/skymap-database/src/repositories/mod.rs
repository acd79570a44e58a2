//! Repository implementations for SkyMap entities.

pub mod launch_site;
pub mod target;

pub use launch_site::LaunchSiteRepository;
pub use target::TargetRepository;
