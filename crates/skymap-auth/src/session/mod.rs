//! Stateless admin sessions.

pub mod manager;
pub mod token;

pub use manager::{AdminSession, IssuedSession, SessionManager};
pub use token::{DEV_SESSION_SECRET, SessionClaims, SessionSigner};
