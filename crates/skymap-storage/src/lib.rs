//! # skymap-storage
//!
//! The [`MarkerStore`] persistence contract shared by every backend, and the
//! file-backed [`JsonFileStore`] implementation. The PostgreSQL backend lives
//! in `skymap-database`.

pub mod providers;
pub mod store;

pub use providers::json_file::JsonFileStore;
pub use store::MarkerStore;
