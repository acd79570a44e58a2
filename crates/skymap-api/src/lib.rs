//! # skymap-api
//!
//! HTTP API layer for SkyMap built on Axum.
//!
//! Provides the target, launch site, presence and admin endpoints, the
//! session-cookie extractor, request logging and CORS middleware, DTOs, and
//! error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
