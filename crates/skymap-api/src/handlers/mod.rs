//! HTTP request handlers.

pub mod admin;
pub mod health;
pub mod launch_site;
pub mod presence;
pub mod target;
