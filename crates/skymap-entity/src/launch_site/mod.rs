//! Launch site domain entities.

pub mod defaults;
pub mod model;

pub use defaults::{DEFAULT_LAUNCH_SITES, default_launch_sites};
pub use model::{LaunchSite, LaunchSiteDraft};
