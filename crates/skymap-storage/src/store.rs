//! Marker store trait for pluggable persistence backends.

use async_trait::async_trait;

use skymap_core::result::AppResult;
use skymap_entity::{LaunchSite, Target};

/// Uniform CRUD over targets and launch sites.
///
/// Implementations exist for JSON documents on disk ([`crate::JsonFileStore`])
/// and PostgreSQL (`skymap_database::PgMarkerStore`). Which one is used is
/// decided once at startup.
///
/// The `list_*` methods never fail: an unreadable backend is logged and
/// reported as an empty collection so the public map keeps rendering. Every
/// other method surfaces backend failures to the caller.
#[async_trait]
pub trait MarkerStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name for logs and health output (`"json"`, `"postgres"`).
    fn backend(&self) -> &'static str;

    /// All targets. Insertion order for documents, most recently updated
    /// first for relational storage.
    async fn list_targets(&self) -> Vec<Target>;

    /// Look up a single target by id.
    async fn get_target(&self, id: &str) -> AppResult<Option<Target>>;

    /// Insert the target, or replace the stored record with the same id.
    async fn upsert_target(&self, target: &Target) -> AppResult<()>;

    /// Remove a target. Fails with `NotFound` when no such id exists.
    async fn delete_target(&self, id: &str) -> AppResult<()>;

    /// Remove every target.
    async fn clear_targets(&self) -> AppResult<()>;

    /// All launch sites.
    async fn list_launch_sites(&self) -> Vec<LaunchSite>;

    /// Look up a single launch site by name.
    async fn get_launch_site(&self, name: &str) -> AppResult<Option<LaunchSite>>;

    /// Create the site, or update the stored site with the same name.
    async fn upsert_launch_site(&self, site: &LaunchSite) -> AppResult<()>;

    /// Store `defaults` if, and only if, there are no launch sites yet.
    ///
    /// For documents that means the file does not exist; an existing empty
    /// list is left alone. Tables are seeded when they hold zero rows.
    ///
    /// Returns the number of sites written.
    async fn seed_launch_sites_if_empty(&self, defaults: Vec<LaunchSite>) -> AppResult<usize>;
}
