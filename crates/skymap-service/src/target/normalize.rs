//! Turn a [`TargetDraft`] into storable fields.

use chrono::{DateTime, Utc};
use validator::Validate;

use skymap_core::error::AppError;
use skymap_core::result::AppResult;
use skymap_entity::{Target, TargetDraft};

/// Maximum length of a type token.
pub const TYPE_MAX_LEN: usize = 32;

/// Notes are cut to this many characters.
pub const NOTE_MAX_CHARS: usize = 140;

/// Normalized, validated target fields (everything but id and timestamps).
#[derive(Debug, Clone, PartialEq)]
pub struct TargetFields {
    pub kind: String,
    pub lat: f64,
    pub lng: f64,
    pub direction: i32,
    pub note: String,
    pub speed_kmh: f64,
    pub dest_lat: Option<f64>,
    pub dest_lng: Option<f64>,
    pub active: bool,
}

impl TargetFields {
    /// Build a full record.
    pub fn into_target(
        self,
        id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Target {
        Target {
            id,
            kind: self.kind,
            lat: self.lat,
            lng: self.lng,
            direction: self.direction,
            note: self.note,
            speed_kmh: self.speed_kmh,
            dest_lat: self.dest_lat,
            dest_lng: self.dest_lng,
            active: self.active,
            created_at,
            updated_at,
        }
    }
}

/// Validate and normalize client input.
///
/// - `type` is trimmed and lowercased, then must match `[a-z0-9_]{1,32}`
/// - `direction` wraps into `[0, 360)`
/// - coordinates are range-checked and rounded to 6 decimals
/// - `speed_kmh` must be non-negative and is rounded to 1 decimal
/// - destination coordinates must come as a pair
/// - `note` is trimmed and cut to [`NOTE_MAX_CHARS`]
pub fn normalize_target(draft: TargetDraft) -> AppResult<TargetFields> {
    draft.validate()?;

    let kind = normalize_type(&draft.kind)?;

    let (dest_lat, dest_lng) = match (draft.dest_lat, draft.dest_lng) {
        (Some(lat), Some(lng)) => (Some(round_coord(lat)), Some(round_coord(lng))),
        (None, None) => (None, None),
        _ => {
            return Err(AppError::validation(
                "dest_lat and dest_lng must be given together",
            ));
        }
    };

    Ok(TargetFields {
        kind,
        lat: round_coord(draft.lat),
        lng: round_coord(draft.lng),
        direction: normalize_direction(draft.direction),
        note: normalize_note(draft.note.as_deref()),
        speed_kmh: round_to(draft.speed_kmh.unwrap_or(0.0), 1),
        dest_lat,
        dest_lng,
        active: draft.active.unwrap_or(true),
    })
}

fn normalize_type(raw: &str) -> AppResult<String> {
    let kind = raw.trim().to_lowercase();
    if kind.is_empty() {
        return Err(AppError::validation("type is required"));
    }
    if kind.len() > TYPE_MAX_LEN {
        return Err(AppError::validation(format!(
            "type must be at most {TYPE_MAX_LEN} characters"
        )));
    }
    if !kind
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        return Err(AppError::validation(
            "type may only contain a-z, 0-9 and '_'",
        ));
    }
    Ok(kind)
}

/// Wrap any heading into `[0, 360)`.
pub fn normalize_direction(degrees: i64) -> i32 {
    degrees.rem_euclid(360) as i32
}

fn normalize_note(raw: Option<&str>) -> String {
    raw.map(|n| n.trim().chars().take(NOTE_MAX_CHARS).collect())
        .unwrap_or_default()
}

/// Round a coordinate to 6 decimals (about 0.1 m), the precision stored
/// for every map position.
pub fn round_coord(value: f64) -> f64 {
    round_to(value, 6)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
