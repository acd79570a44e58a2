//! Target CRUD.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use skymap_core::error::AppError;
use skymap_core::result::AppResult;
use skymap_entity::{Target, TargetDraft};
use skymap_storage::MarkerStore;

use super::normalize::normalize_target;

/// Target collection plus its latest change time.
#[derive(Debug, Clone, Serialize)]
pub struct TargetList {
    /// Latest `created_at`/`updated_at` across all targets.
    pub updated_at: Option<DateTime<Utc>>,
    /// The targets, in store order.
    pub targets: Vec<Target>,
}

/// Manages the target collection.
#[derive(Debug, Clone)]
pub struct TargetService {
    store: Arc<dyn MarkerStore>,
}

impl TargetService {
    /// Creates a new target service.
    pub fn new(store: Arc<dyn MarkerStore>) -> Self {
        Self { store }
    }

    /// Lists all targets. Never fails; an unreadable store yields an empty list.
    pub async fn list(&self) -> TargetList {
        let targets = self.store.list_targets().await;
        TargetList {
            updated_at: last_modified(&targets),
            targets,
        }
    }

    /// Latest change across the collection, if any.
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        last_modified(&self.store.list_targets().await)
    }

    /// Places a new target.
    pub async fn create(&self, draft: TargetDraft) -> AppResult<Target> {
        let fields = normalize_target(draft)?;
        let now = Utc::now();
        let target = fields.into_target(Target::generate_id(), now, now);

        self.store.upsert_target(&target).await?;

        info!(id = %target.id, kind = %target.kind, "Target created");
        Ok(target)
    }

    /// Replaces every field of an existing target except `id` and `created_at`.
    pub async fn update(&self, id: &str, draft: TargetDraft) -> AppResult<Target> {
        let fields = normalize_target(draft)?;
        let existing = self
            .store
            .get_target(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Target not found: {id}")))?;

        // Clock steps backwards must not make updated_at go back in time.
        let updated_at = Utc::now().max(existing.last_modified());
        let target = fields.into_target(existing.id, existing.created_at, updated_at);

        self.store.upsert_target(&target).await?;

        info!(id = %target.id, "Target updated");
        Ok(target)
    }

    /// Removes a target; `NotFound` if the id does not exist.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete_target(id).await?;
        info!(id = %id, "Target deleted");
        Ok(())
    }

    /// Removes every target.
    pub async fn clear(&self) -> AppResult<()> {
        self.store.clear_targets().await?;
        info!("All targets cleared");
        Ok(())
    }
}

fn last_modified(targets: &[Target]) -> Option<DateTime<Utc>> {
    targets.iter().map(Target::last_modified).max()
}
