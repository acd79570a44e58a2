//! Admin session lifecycle: login and per-request verification.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use skymap_core::config::AuthConfig;
use skymap_core::error::{AppError, ErrorKind};
use skymap_core::result::AppResult;

use crate::password::PasswordVerifier;

use super::token::SessionSigner;

/// A verified admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSession {
    /// The admin account name.
    pub username: String,
    /// When the session stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// A freshly issued session token, ready to be set as a cookie.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Signed token value.
    pub token: String,
    /// The session it encodes.
    pub session: AdminSession,
    /// Cookie lifetime.
    pub max_age: Duration,
}

/// Issues and verifies admin sessions for the single configured account.
#[derive(Debug, Clone)]
pub struct SessionManager {
    admin_username: String,
    verifier: PasswordVerifier,
    signer: SessionSigner,
    session_ttl: Duration,
    remember_ttl: Duration,
}

impl SessionManager {
    /// Build a manager from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            admin_username: config.admin_username.clone(),
            verifier: PasswordVerifier::from_config(config),
            signer: SessionSigner::from_config(config),
            session_ttl: Duration::hours(config.session_ttl_hours as i64),
            remember_ttl: Duration::days(config.remember_ttl_days as i64),
        }
    }

    /// The configured admin account name.
    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    /// Whether tokens are signed with the development fallback secret.
    pub fn uses_dev_secret(&self) -> bool {
        self.signer.uses_dev_secret()
    }

    /// Active password source (`pbkdf2`, `plaintext` or `dev-default`).
    pub fn password_mode(&self) -> &'static str {
        self.verifier.mode()
    }

    /// Check credentials and issue a signed session.
    ///
    /// The password is verified even when the username is wrong so both
    /// failures take the same time.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedSession> {
        let user_ok: bool = username
            .as_bytes()
            .ct_eq(self.admin_username.as_bytes())
            .into();
        let password_ok = self.verifier.verify(password);

        if !(user_ok && password_ok) {
            warn!(username = %username, "Admin login failed");
            return Err(AppError::authentication("Invalid username or password"));
        }

        let max_age = if remember {
            self.remember_ttl
        } else {
            self.session_ttl
        };
        let expires_at = now + max_age;
        let token = self.signer.sign(&self.admin_username, expires_at)?;

        info!(username = %self.admin_username, remember, "Admin logged in");

        Ok(IssuedSession {
            token,
            session: AdminSession {
                username: self.admin_username.clone(),
                expires_at,
            },
            max_age,
        })
    }

    /// [`Self::login`] on the blocking pool.
    ///
    /// Password hashing is CPU-bound, so request handlers call this instead
    /// of stalling a runtime worker.
    pub async fn login_blocking(
        self: Arc<Self>,
        username: String,
        password: String,
        remember: bool,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedSession> {
        tokio::task::spawn_blocking(move || self.login(&username, &password, remember, now))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Login task panicked", e))?
    }

    /// Verify a session token presented at `now`.
    pub fn authenticate(&self, token: &str, now: DateTime<Utc>) -> AppResult<AdminSession> {
        let claims = self.signer.verify(token, now)?;

        if claims.username != self.admin_username {
            return Err(AppError::authentication("Session belongs to another user"));
        }

        Ok(AdminSession {
            username: claims.username,
            expires_at: claims.expires_at,
        })
    }
}
