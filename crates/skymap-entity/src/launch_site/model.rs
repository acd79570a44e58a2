//! Launch site entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::number;

/// A named fixed site of interest, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LaunchSite {
    /// Unique site name (primary key).
    pub name: String,
    /// Latitude, if the site has been placed.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, if the site has been placed.
    #[serde(default)]
    pub lng: Option<f64>,
    /// Whether the site is currently shown.
    #[serde(default = "default_active")]
    pub active: bool,
    /// When the site was last changed.
    pub updated_at: DateTime<Utc>,
}

impl LaunchSite {
    /// Whether the site has coordinates.
    pub fn is_placed(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }
}

fn default_active() -> bool {
    true
}

/// Client-supplied launch site upsert.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LaunchSiteDraft {
    /// Site name; trimmed before use.
    #[serde(default)]
    pub name: String,
    /// Optional latitude.
    #[serde(default, deserialize_with = "number::option_float")]
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub lat: Option<f64>,
    /// Optional longitude.
    #[serde(default, deserialize_with = "number::option_float")]
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub lng: Option<f64>,
    /// Visibility flag; defaults to `true`.
    #[serde(default)]
    pub active: Option<bool>,
}
