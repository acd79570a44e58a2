//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{ADMIN_SESSION_HEADER, AdminUser};
pub use json::JsonBody;
