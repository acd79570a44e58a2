//! Presence tracking configuration.

use serde::{Deserialize, Serialize};

/// Sliding-window presence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// A session counts as online for this many seconds after its last ping.
    #[serde(default = "default_window")]
    pub window_seconds: u64,
    /// Session ids are truncated to this many characters.
    #[serde(default = "default_max_session_id_len")]
    pub max_session_id_len: usize,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            window_seconds: default_window(),
            max_session_id_len: default_max_session_id_len(),
        }
    }
}

fn default_window() -> u64 {
    60
}

fn default_max_session_id_len() -> usize {
    80
}
