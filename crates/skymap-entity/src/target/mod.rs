//! Target domain entities.

pub mod model;

pub use model::{Target, TargetDraft};
