//! Admin password verification.

pub mod verifier;

pub use verifier::{DEV_DEFAULT_PASSWORD, PasswordVerifier, hash_password};
