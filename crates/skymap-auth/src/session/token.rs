//! HMAC-SHA256 signed session tokens.
//!
//! Token layout: `base64url(payload) "." base64url(mac)` where the payload is
//! `username|expiry_epoch_seconds`. Nothing is stored server-side; a token is
//! valid as long as its MAC checks out and its expiry is in the future.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use skymap_core::config::AuthConfig;
use skymap_core::error::AppError;
use skymap_core::result::AppResult;

type HmacSha256 = Hmac<Sha256>;

/// Signing secret used when `auth.session_secret` is not configured.
pub const DEV_SESSION_SECRET: &str = "skymap-dev-session-secret";

/// Fields carried by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Account the token was issued to.
    pub username: String,
    /// Absolute expiry, second precision.
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies session tokens with a single secret.
#[derive(Clone)]
pub struct SessionSigner {
    secret: Vec<u8>,
    dev_secret: bool,
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("dev_secret", &self.dev_secret)
            .finish()
    }
}

impl SessionSigner {
    /// Create a signer over an explicit secret.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            dev_secret: false,
        }
    }

    /// Create a signer from configuration, falling back to [`DEV_SESSION_SECRET`].
    pub fn from_config(config: &AuthConfig) -> Self {
        match config.configured_secret() {
            Some(secret) => Self::new(secret),
            None => Self {
                secret: DEV_SESSION_SECRET.as_bytes().to_vec(),
                dev_secret: true,
            },
        }
    }

    /// Whether the development fallback secret is in use.
    pub fn uses_dev_secret(&self) -> bool {
        self.dev_secret
    }

    fn mac(&self) -> AppResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::internal(format!("Invalid session secret: {e}")))
    }

    /// Produce a token for `username` expiring at `expires_at`.
    pub fn sign(&self, username: &str, expires_at: DateTime<Utc>) -> AppResult<String> {
        let payload = format!("{username}|{}", expires_at.timestamp());

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Check a token's signature and expiry against `now`.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> AppResult<SessionClaims> {
        let (payload_b64, signature_b64) = token
            .rsplit_once('.')
            .ok_or_else(|| AppError::authentication("Malformed session token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AppError::authentication("Malformed session token"))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AppError::authentication("Malformed session token"))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| AppError::authentication("Invalid session signature"))?;

        let payload = String::from_utf8(payload)
            .map_err(|_| AppError::authentication("Malformed session token"))?;
        let (username, expiry) = payload
            .rsplit_once('|')
            .ok_or_else(|| AppError::authentication("Malformed session token"))?;
        let expires_at = expiry
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| AppError::authentication("Malformed session token"))?;

        if expires_at <= now {
            return Err(AppError::authentication("Session has expired"));
        }

        Ok(SessionClaims {
            username: username.to_string(),
            expires_at,
        })
    }
}
