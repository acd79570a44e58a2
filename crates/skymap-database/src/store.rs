//! PostgreSQL-backed [`MarkerStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use skymap_core::error::AppError;
use skymap_core::result::AppResult;
use skymap_entity::{LaunchSite, Target};
use skymap_storage::MarkerStore;

use crate::repositories::{LaunchSiteRepository, TargetRepository};

/// Marker store over the `targets` and `launchsites` tables.
#[derive(Debug, Clone)]
pub struct PgMarkerStore {
    targets: TargetRepository,
    launch_sites: LaunchSiteRepository,
}

impl PgMarkerStore {
    /// Create a store on an existing pool. The schema must already exist.
    pub fn new(pool: PgPool) -> Self {
        Self {
            targets: TargetRepository::new(pool.clone()),
            launch_sites: LaunchSiteRepository::new(pool),
        }
    }
}

#[async_trait]
impl MarkerStore for PgMarkerStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_targets(&self) -> Vec<Target> {
        self.targets.find_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Target query failed, serving empty list");
            Vec::new()
        })
    }

    async fn get_target(&self, id: &str) -> AppResult<Option<Target>> {
        self.targets.find_by_id(id).await
    }

    async fn upsert_target(&self, target: &Target) -> AppResult<()> {
        self.targets.upsert(target).await
    }

    async fn delete_target(&self, id: &str) -> AppResult<()> {
        if self.targets.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Target not found: {id}")))
        }
    }

    async fn clear_targets(&self) -> AppResult<()> {
        let removed = self.targets.delete_all().await?;
        info!(removed, "Cleared targets");
        Ok(())
    }

    async fn list_launch_sites(&self) -> Vec<LaunchSite> {
        self.launch_sites.find_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Launch site query failed, serving empty list");
            Vec::new()
        })
    }

    async fn get_launch_site(&self, name: &str) -> AppResult<Option<LaunchSite>> {
        self.launch_sites.find_by_name(name).await
    }

    async fn upsert_launch_site(&self, site: &LaunchSite) -> AppResult<()> {
        self.launch_sites.upsert(site).await
    }

    async fn seed_launch_sites_if_empty(&self, defaults: Vec<LaunchSite>) -> AppResult<usize> {
        if self.launch_sites.count().await? > 0 {
            return Ok(0);
        }
        let inserted = self.launch_sites.insert_missing(&defaults).await?;
        Ok(inserted as usize)
    }
}
