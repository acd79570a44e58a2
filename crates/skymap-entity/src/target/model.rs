//! Target entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::number;

/// A tracked object placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Target {
    /// Server-generated identifier.
    pub id: String,
    /// Lowercase type token (`shahed`, `cruise`, ...).
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Heading in whole degrees, always in `[0, 360)`.
    pub direction: i32,
    /// Free-form note, at most 140 characters.
    #[serde(default)]
    pub note: String,
    /// Ground speed in km/h.
    #[serde(default)]
    pub speed_kmh: f64,
    /// Destination latitude (paired with `dest_lng`).
    #[serde(default)]
    pub dest_lat: Option<f64>,
    /// Destination longitude (paired with `dest_lat`).
    #[serde(default)]
    pub dest_lng: Option<f64>,
    /// Whether the target is shown to viewers.
    #[serde(default = "default_active")]
    pub active: bool,
    /// When the target was first placed.
    pub created_at: DateTime<Utc>,
    /// When the target was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Target {
    /// Generate a fresh target identifier.
    ///
    /// UUIDv7 keeps ids roughly time-ordered while the random tail keeps two
    /// ids minted in the same millisecond distinct.
    pub fn generate_id() -> String {
        format!("t{}", Uuid::now_v7().simple())
    }

    /// The most recent of `created_at` and `updated_at`.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.max(self.created_at)
    }
}

fn default_active() -> bool {
    true
}

/// Client-supplied target fields, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TargetDraft {
    /// Type token; trimmed and lowercased before validation.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Latitude.
    #[serde(deserialize_with = "number::float")]
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub lat: f64,
    /// Longitude.
    #[serde(deserialize_with = "number::float")]
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub lng: f64,
    /// Heading in degrees, any integer.
    #[serde(default, deserialize_with = "number::degrees")]
    pub direction: i64,
    /// Optional note.
    #[serde(default)]
    pub note: Option<String>,
    /// Optional speed in km/h.
    #[serde(default, deserialize_with = "number::option_float")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub speed_kmh: Option<f64>,
    /// Optional destination latitude.
    #[serde(default, deserialize_with = "number::option_float")]
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub dest_lat: Option<f64>,
    /// Optional destination longitude.
    #[serde(default, deserialize_with = "number::option_float")]
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub dest_lng: Option<f64>,
    /// Optional visibility flag; defaults to `true`.
    #[serde(default)]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids: std::collections::HashSet<String> =
            (0..1000).map(|_| Target::generate_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.starts_with('t')));
    }

    #[test]
    fn test_target_json_uses_type_key() {
        let now = Utc::now();
        let target = Target {
            id: "t1".to_string(),
            kind: "shahed".to_string(),
            lat: 48.5,
            lng: 35.9,
            direction: 90,
            note: String::new(),
            speed_kmh: 0.0,
            dest_lat: None,
            dest_lng: None,
            active: true,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["type"], "shahed");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_older_documents_fill_defaults() {
        let target: Target = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "type": "fpv",
            "lat": 48.0,
            "lng": 35.0,
            "direction": 10,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert!(target.active);
        assert_eq!(target.speed_kmh, 0.0);
        assert_eq!(target.note, "");
    }

    #[test]
    fn test_draft_validation_ranges() {
        let draft: TargetDraft = serde_json::from_value(serde_json::json!({
            "type": "cruise", "lat": 91, "lng": 30
        }))
        .unwrap();
        assert!(draft.validate().is_err());

        let draft: TargetDraft = serde_json::from_value(serde_json::json!({
            "type": "cruise", "lat": 48, "lng": 30, "speed_kmh": -1
        }))
        .unwrap();
        assert!(draft.validate().is_err());

        let draft: TargetDraft = serde_json::from_value(serde_json::json!({
            "type": "cruise", "lat": "48.1", "lng": 30, "speed_kmh": "450"
        }))
        .unwrap();
        assert!(draft.validate().is_ok());
    }
}
