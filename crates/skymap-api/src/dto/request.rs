//! Request DTOs.
//!
//! Target and launch site bodies deserialize straight into
//! [`skymap_entity::TargetDraft`] and [`skymap_entity::LaunchSiteDraft`].

use serde::{Deserialize, Deserializer, Serialize};

/// Admin login body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
    /// Issue a long-lived session.
    #[serde(default)]
    pub remember: bool,
}

/// Presence ping body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresenceRequest {
    /// Opaque viewer session id.
    #[serde(default, deserialize_with = "sid_text")]
    pub sid: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SidLike {
    Text(String),
    Number(serde_json::Number),
}

/// Viewer scripts sometimes send the id as a bare number.
fn sid_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SidLike>::deserialize(deserializer)? {
        Some(SidLike::Text(s)) => s,
        Some(SidLike::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
