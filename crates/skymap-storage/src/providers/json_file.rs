//! JSON document store.
//!
//! Each collection is one pretty-printed JSON array on disk. Writes go to a
//! sibling `.tmp` file which is fsynced and then renamed over the document,
//! so a reader sees either the old or the new array and never a torn one.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use skymap_core::config::StorageConfig;
use skymap_core::error::AppError;
use skymap_core::result::AppResult;
use skymap_entity::{LaunchSite, Target};

use crate::store::MarkerStore;

/// File-backed marker store.
#[derive(Debug)]
pub struct JsonFileStore {
    targets_path: PathBuf,
    launch_sites_path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store from configuration, creating the data directory.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        fs::create_dir_all(&config.data_dir).await.map_err(|e| {
            AppError::storage(
                format!("Failed to create data directory: {}", config.data_dir),
                e,
            )
        })?;

        Ok(Self::with_paths(
            config.targets_path(),
            config.launch_sites_path(),
        ))
    }

    /// Create a store over explicit document paths.
    pub fn with_paths(targets_path: PathBuf, launch_sites_path: PathBuf) -> Self {
        Self {
            targets_path,
            launch_sites_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read a document for display; any failure yields an empty list.
    async fn read_lenient<T: DeserializeOwned>(path: &Path) -> Vec<T> {
        match Self::read_strict(path).await {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable document, serving empty list");
                Vec::new()
            }
        }
    }

    /// Read a document before modifying it.
    ///
    /// A missing file is an empty collection; a malformed one is an error so
    /// that a write never silently replaces data it could not parse.
    async fn read_strict<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
        let raw = match fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::storage(
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let items: Option<Vec<T>> = serde_json::from_slice(&raw).map_err(|e| {
            AppError::storage(
                format!("Malformed document {}", path.display()),
                e,
            )
        })?;
        Ok(items.unwrap_or_default())
    }

    /// Atomically replace a document with `items`.
    async fn write_document<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
        let data = serde_json::to_vec_pretty(items)?;
        let tmp = temp_path(path);

        let mut file = fs::File::create(&tmp).await.map_err(|e| {
            AppError::storage(
                format!("Failed to create {}", tmp.display()),
                e,
            )
        })?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp, path).await.map_err(|e| {
            AppError::storage(
                format!("Failed to replace {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), items = items.len(), "Wrote document");
        Ok(())
    }
}

/// `targets.json` -> `targets.json.tmp`, in the same directory so the rename
/// stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl MarkerStore for JsonFileStore {
    fn backend(&self) -> &'static str {
        "json"
    }

    async fn list_targets(&self) -> Vec<Target> {
        Self::read_lenient(&self.targets_path).await
    }

    async fn get_target(&self, id: &str) -> AppResult<Option<Target>> {
        let items: Vec<Target> = Self::read_strict(&self.targets_path).await?;
        Ok(items.into_iter().find(|t| t.id == id))
    }

    async fn upsert_target(&self, target: &Target) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<Target> = Self::read_strict(&self.targets_path).await?;

        match items.iter_mut().find(|t| t.id == target.id) {
            Some(existing) => *existing = target.clone(),
            None => items.push(target.clone()),
        }

        Self::write_document(&self.targets_path, &items).await
    }

    async fn delete_target(&self, id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<Target> = Self::read_strict(&self.targets_path).await?;

        let before = items.len();
        items.retain(|t| t.id != id);
        if items.len() == before {
            return Err(AppError::not_found(format!("Target not found: {id}")));
        }

        Self::write_document(&self.targets_path, &items).await
    }

    async fn clear_targets(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        Self::write_document::<Target>(&self.targets_path, &[]).await
    }

    async fn list_launch_sites(&self) -> Vec<LaunchSite> {
        Self::read_lenient(&self.launch_sites_path).await
    }

    async fn get_launch_site(&self, name: &str) -> AppResult<Option<LaunchSite>> {
        let items: Vec<LaunchSite> = Self::read_strict(&self.launch_sites_path).await?;
        Ok(items.into_iter().find(|s| s.name == name))
    }

    async fn upsert_launch_site(&self, site: &LaunchSite) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<LaunchSite> = Self::read_strict(&self.launch_sites_path).await?;

        match items.iter_mut().find(|s| s.name == site.name) {
            Some(existing) => *existing = site.clone(),
            None => items.push(site.clone()),
        }

        Self::write_document(&self.launch_sites_path, &items).await
    }

    async fn seed_launch_sites_if_empty(&self, defaults: Vec<LaunchSite>) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;
        // An existing document, even `[]`, is the operator's list.
        let exists = fs::try_exists(&self.launch_sites_path).await.map_err(|e| {
            AppError::storage(
                format!("Failed to stat {}", self.launch_sites_path.display()),
                e,
            )
        })?;
        if exists {
            return Ok(0);
        }

        Self::write_document(&self.launch_sites_path, &defaults).await?;
        Ok(defaults.len())
    }
}
