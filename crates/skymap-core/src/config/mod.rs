//! Application configuration schemas.
//!
//! Configuration is layered with the `config` crate: optional TOML files,
//! `SKYMAP__`-prefixed environment variables, and finally the conventional
//! bare variables (`DATABASE_URL`, `ADMIN_PASSWORD`, ...) that hosting
//! platforms usually inject.

pub mod app;
pub mod auth;
pub mod logging;
pub mod presence;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::presence::PresenceConfig;
pub use self::storage::{DatabaseConfig, StorageConfig};

use crate::error::AppError;

/// Bare environment variables mapped onto configuration keys.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("ADMIN_USERNAME", "auth.admin_username"),
    ("ADMIN_PASSWORD", "auth.admin_password"),
    ("ADMIN_PASSWORD_SALT", "auth.admin_password_salt"),
    ("ADMIN_PASSWORD_HASH", "auth.admin_password_hash"),
    ("SESSION_SECRET", "auth.session_secret"),
    ("PORT", "server.port"),
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings (optional backend).
    #[serde(default)]
    pub database: DatabaseConfig,
    /// JSON document store settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Admin authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Presence tracking settings.
    #[serde(default)]
    pub presence: PresenceConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml`, `SKYMAP__*`
    /// variables and the bare variables in [`ENV_OVERRIDES`], in that order.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SKYMAP")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in ENV_OVERRIDES {
            let value = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Whether persistence should use PostgreSQL instead of JSON documents.
    pub fn uses_database(&self) -> bool {
        self.database.configured_url().is_some()
    }
}
