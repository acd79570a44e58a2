//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{ "ok": true }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    /// Successful acknowledgement.
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Presence ping result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceResponse {
    /// Sessions seen in the window.
    pub online: usize,
}

/// Public map statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Sessions seen in the window.
    pub online: usize,
    /// Latest target change, if any target exists.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Current admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub ok: bool,
    /// Admin account name.
    pub username: String,
    /// Session expiry.
    pub expires_at: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Active persistence backend.
    pub storage: String,
}
