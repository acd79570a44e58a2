//! # skymap-database
//!
//! PostgreSQL connection management, idempotent schema bootstrap, and the
//! relational [`PgMarkerStore`] implementation of
//! [`skymap_storage::MarkerStore`].

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::PgMarkerStore;
