//! # skymap-auth
//!
//! Authentication for the single SkyMap admin account.
//!
//! ## Modules
//!
//! - `password`: PBKDF2-SHA256 / plaintext password verification
//! - `session`: HMAC-signed session tokens and the login/verify lifecycle

pub mod password;
pub mod session;

pub use password::{PasswordVerifier, hash_password};
pub use session::{AdminSession, IssuedSession, SessionManager, SessionSigner};
