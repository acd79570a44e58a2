//! PBKDF2-SHA256 and plaintext password verification.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::warn;

use skymap_core::config::AuthConfig;

/// Password accepted when neither a hash nor a plaintext password is configured.
pub const DEV_DEFAULT_PASSWORD: &str = "skymap-dev";

/// Derived key length in bytes.
const KEY_LEN: usize = 32;

/// Compute the hex-encoded PBKDF2-HMAC-SHA256 digest of `password`.
pub fn hash_password(password: &str, salt: &str, iterations: u32) -> String {
    let mut derived = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut derived);
    hex::encode(derived)
}

/// The credential a candidate password is checked against.
#[derive(Clone)]
enum Credential {
    /// Salted PBKDF2 digest (raw bytes, decoded from hex).
    Hashed {
        salt: String,
        digest: Vec<u8>,
        iterations: u32,
    },
    /// Plaintext password from configuration.
    Plain(String),
    /// Built-in development password.
    DevDefault,
}

/// Verifies the admin password against the configured credential.
///
/// Priority: salt + hash pair, then plaintext password, then
/// [`DEV_DEFAULT_PASSWORD`]. All comparisons run in constant time.
#[derive(Clone)]
pub struct PasswordVerifier {
    credential: Credential,
}

impl std::fmt::Debug for PasswordVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordVerifier")
            .field("mode", &self.mode())
            .finish()
    }
}

impl PasswordVerifier {
    /// Build a verifier from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        if let Some((salt, hash)) = config.password_hash_pair() {
            match hex::decode(hash.trim()) {
                Ok(digest) => {
                    return Self {
                        credential: Credential::Hashed {
                            salt: salt.to_string(),
                            digest,
                            iterations: config.pbkdf2_iterations,
                        },
                    };
                }
                Err(e) => {
                    warn!(error = %e, "admin_password_hash is not valid hex, ignoring it");
                }
            }
        }

        let credential = match config.plaintext_password() {
            Some(password) => Credential::Plain(password.to_string()),
            None => Credential::DevDefault,
        };
        Self { credential }
    }

    /// Short name of the active credential source, for startup logs.
    pub fn mode(&self) -> &'static str {
        match self.credential {
            Credential::Hashed { .. } => "pbkdf2",
            Credential::Plain(_) => "plaintext",
            Credential::DevDefault => "dev-default",
        }
    }

    /// Whether the built-in development password is in effect.
    pub fn is_dev_default(&self) -> bool {
        matches!(self.credential, Credential::DevDefault)
    }

    /// Check a candidate password.
    pub fn verify(&self, candidate: &str) -> bool {
        match &self.credential {
            Credential::Hashed {
                salt,
                digest,
                iterations,
            } => {
                let mut derived = [0u8; KEY_LEN];
                pbkdf2_hmac::<Sha256>(
                    candidate.as_bytes(),
                    salt.as_bytes(),
                    *iterations,
                    &mut derived,
                );
                derived.as_slice().ct_eq(digest.as_slice()).into()
            }
            Credential::Plain(expected) => candidate.as_bytes().ct_eq(expected.as_bytes()).into(),
            Credential::DevDefault => candidate
                .as_bytes()
                .ct_eq(DEV_DEFAULT_PASSWORD.as_bytes())
                .into(),
        }
    }
}
