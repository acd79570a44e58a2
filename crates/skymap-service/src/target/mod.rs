//! Target use cases.

pub mod normalize;
pub mod service;

pub use normalize::{NOTE_MAX_CHARS, TYPE_MAX_LEN, TargetFields, normalize_target};
pub use service::{TargetList, TargetService};
