//! Convenience result type alias for SkyMap.

use crate::error::AppError;

/// A specialized `Result` type for SkyMap operations.
pub type AppResult<T> = Result<T, AppError>;
