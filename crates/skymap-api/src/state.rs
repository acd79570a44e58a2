//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use skymap_auth::SessionManager;
use skymap_core::config::AppConfig;
use skymap_realtime::PresenceTracker;
use skymap_service::{LaunchSiteService, TargetService};
use skymap_storage::MarkerStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Persistence backend selected at startup
    pub store: Arc<dyn MarkerStore>,
    /// Viewer presence, lives as long as the process
    pub presence: Arc<PresenceTracker>,

    // ── Auth ─────────────────────────────────────────────────
    /// Admin login and session verification
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Target service
    pub target_service: Arc<TargetService>,
    /// Launch site service
    pub launch_site_service: Arc<LaunchSiteService>,
}

impl AppState {
    /// Wire services around the chosen store.
    pub fn new(config: AppConfig, store: Arc<dyn MarkerStore>) -> Self {
        Self {
            presence: Arc::new(PresenceTracker::new(&config.presence)),
            session_manager: Arc::new(SessionManager::from_config(&config.auth)),
            target_service: Arc::new(TargetService::new(Arc::clone(&store))),
            launch_site_service: Arc::new(LaunchSiteService::new(Arc::clone(&store))),
            store,
            config: Arc::new(config),
        }
    }
}
