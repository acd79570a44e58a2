//! Admin authentication configuration.

use serde::{Deserialize, Serialize};

/// Admin credential and session-cookie configuration.
///
/// Password verification prefers `admin_password_salt` + `admin_password_hash`,
/// then `admin_password`, then the built-in development password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The single admin account name.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Plaintext admin password (fallback when no hash is configured).
    #[serde(default)]
    pub admin_password: Option<String>,
    /// Salt used for the PBKDF2 admin password hash.
    #[serde(default)]
    pub admin_password_salt: Option<String>,
    /// Hex-encoded PBKDF2-HMAC-SHA256 digest of the admin password.
    #[serde(default)]
    pub admin_password_hash: Option<String>,
    /// PBKDF2 iteration count.
    #[serde(default = "default_iterations")]
    pub pbkdf2_iterations: u32,
    /// HMAC secret for session tokens.
    #[serde(default)]
    pub session_secret: Option<String>,
    /// Session lifetime without "remember me", in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Session lifetime with "remember me", in days.
    #[serde(default = "default_remember_ttl")]
    pub remember_ttl_days: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Always mark the cookie `Secure`, even when HTTPS is not detected.
    #[serde(default)]
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Returns the configured PBKDF2 salt/hash pair if both are non-empty.
    pub fn password_hash_pair(&self) -> Option<(&str, &str)> {
        let salt = self.admin_password_salt.as_deref().filter(|s| !s.is_empty())?;
        let hash = self.admin_password_hash.as_deref().filter(|h| !h.is_empty())?;
        Some((salt, hash))
    }

    /// Returns the configured plaintext password if non-empty.
    pub fn plaintext_password(&self) -> Option<&str> {
        self.admin_password.as_deref().filter(|p| !p.is_empty())
    }

    /// Returns the configured session secret if non-empty.
    pub fn configured_secret(&self) -> Option<&str> {
        self.session_secret.as_deref().filter(|s| !s.is_empty())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password: None,
            admin_password_salt: None,
            admin_password_hash: None,
            pbkdf2_iterations: default_iterations(),
            session_secret: None,
            session_ttl_hours: default_session_ttl(),
            remember_ttl_days: default_remember_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_iterations() -> u32 {
    200_000
}

fn default_session_ttl() -> u64 {
    6
}

fn default_remember_ttl() -> u64 {
    30
}

fn default_cookie_name() -> String {
    "skymap_admin".to_string()
}
