//! Presence tracker: session id to last-seen time.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tracing::trace;

use skymap_core::config::PresenceConfig;

/// Snapshot returned by [`PresenceTracker::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceStats {
    /// Sessions seen inside the window.
    pub online: usize,
    /// Latest change across the target collection, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Tracks recently seen viewer sessions.
///
/// Owned by the application state for the lifetime of the process. Entries
/// are evicted lazily on every ping and read.
#[derive(Debug)]
pub struct PresenceTracker {
    /// Session id → last ping
    last_seen: DashMap<String, DateTime<Utc>>,
    window: Duration,
    max_session_id_len: usize,
}

impl PresenceTracker {
    /// Create a tracker from configuration.
    pub fn new(config: &PresenceConfig) -> Self {
        Self {
            last_seen: DashMap::new(),
            window: Duration::seconds(config.window_seconds as i64),
            max_session_id_len: config.max_session_id_len,
        }
    }

    /// Record a ping at the current time and return the online count.
    pub fn ping(&self, session_id: &str) -> usize {
        self.ping_at(session_id, Utc::now())
    }

    /// Record a ping at `now` and return the online count.
    ///
    /// A blank session id records nothing and reports 0.
    pub fn ping_at(&self, session_id: &str, now: DateTime<Utc>) -> usize {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return 0;
        }

        let key: String = session_id.chars().take(self.max_session_id_len).collect();
        self.last_seen.insert(key, now);
        self.online_count_at(now)
    }

    /// Number of sessions seen within the window ending at `now`.
    pub fn online_count_at(&self, now: DateTime<Utc>) -> usize {
        self.evict_stale(now);
        self.last_seen.len()
    }

    /// Online count plus the caller-supplied data timestamp.
    pub fn stats(&self, now: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> PresenceStats {
        PresenceStats {
            online: self.online_count_at(now),
            updated_at,
        }
    }

    fn evict_stale(&self, now: DateTime<Utc>) {
        let cutoff = now - self.window;
        let before = self.last_seen.len();
        self.last_seen.retain(|_, seen| *seen >= cutoff);

        let evicted = before.saturating_sub(self.last_seen.len());
        if evicted > 0 {
            trace!(evicted, "Evicted stale presence entries");
        }
    }
}

impl Default for PresenceTracker {
    fn default() -> Self {
        Self::new(&PresenceConfig::default())
    }
}
