//! Concrete marker store implementations.

pub mod json_file;
