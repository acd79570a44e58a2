//! Persistence configuration: JSON documents or PostgreSQL.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File-backed document store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the JSON documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// File name of the targets document.
    #[serde(default = "default_targets_file")]
    pub targets_file: String,
    /// File name of the launch sites document.
    #[serde(default = "default_launch_sites_file")]
    pub launch_sites_file: String,
}

impl StorageConfig {
    /// Full path of the targets document.
    pub fn targets_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.targets_file)
    }

    /// Full path of the launch sites document.
    pub fn launch_sites_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.launch_sites_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            targets_file: default_targets_file(),
            launch_sites_file: default_launch_sites_file(),
        }
    }
}

/// Database connection pool configuration.
///
/// A non-empty `url` switches persistence from JSON documents to PostgreSQL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default)]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// The connection URL, if one is configured.
    pub fn configured_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            min_connections: 0,
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_targets_file() -> String {
    "targets.json".to_string()
}

fn default_launch_sites_file() -> String {
    "launchsites.json".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
