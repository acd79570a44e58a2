//! Launch site listing, upsert-by-name, and default seeding.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use skymap_core::error::AppError;
use skymap_core::result::AppResult;
use skymap_entity::launch_site::default_launch_sites;
use skymap_entity::{LaunchSite, LaunchSiteDraft};
use skymap_storage::MarkerStore;

use crate::target::normalize::round_coord;

/// Maximum length of a site name, in characters.
pub const NAME_MAX_CHARS: usize = 80;

/// Launch sites plus their latest change time.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchSiteList {
    /// Latest `updated_at` across all sites.
    pub updated_at: Option<DateTime<Utc>>,
    /// The sites, in store order.
    pub sites: Vec<LaunchSite>,
}

/// Manages the launch site collection.
#[derive(Debug, Clone)]
pub struct LaunchSiteService {
    store: Arc<dyn MarkerStore>,
}

impl LaunchSiteService {
    /// Creates a new launch site service.
    pub fn new(store: Arc<dyn MarkerStore>) -> Self {
        Self { store }
    }

    /// Lists all sites. Never fails.
    pub async fn list(&self) -> LaunchSiteList {
        let sites = self.store.list_launch_sites().await;
        LaunchSiteList {
            updated_at: sites.iter().map(|s| s.updated_at).max(),
            sites,
        }
    }

    /// Creates the named site or updates it in place.
    ///
    /// A draft without coordinates keeps the stored ones; a draft without
    /// `active` keeps the stored flag (new sites default to active).
    pub async fn upsert(&self, draft: LaunchSiteDraft) -> AppResult<LaunchSite> {
        draft.validate()?;

        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name is required"));
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(AppError::validation(format!(
                "name must be at most {NAME_MAX_CHARS} characters"
            )));
        }

        let existing = self.store.get_launch_site(name).await?;
        let now = Utc::now();

        let (lat, lng) = match (draft.lat, draft.lng) {
            (Some(lat), Some(lng)) => (Some(round_coord(lat)), Some(round_coord(lng))),
            (None, None) => existing
                .as_ref()
                .map(|s| (s.lat, s.lng))
                .unwrap_or((None, None)),
            _ => return Err(AppError::validation("lat and lng must be given together")),
        };

        let site = LaunchSite {
            name: name.to_string(),
            lat,
            lng,
            active: draft
                .active
                .or(existing.as_ref().map(|s| s.active))
                .unwrap_or(true),
            updated_at: existing
                .as_ref()
                .map_or(now, |s| now.max(s.updated_at)),
        };

        self.store.upsert_launch_site(&site).await?;

        info!(
            name = %site.name,
            created = existing.is_none(),
            placed = site.is_placed(),
            "Launch site saved"
        );
        Ok(site)
    }

    /// Seeds the built-in list if the collection is empty.
    pub async fn seed_defaults(&self) -> AppResult<usize> {
        let seeded = self
            .store
            .seed_launch_sites_if_empty(default_launch_sites(Utc::now()))
            .await?;
        if seeded > 0 {
            info!(count = seeded, "Seeded default launch sites");
        }
        Ok(seeded)
    }
}
