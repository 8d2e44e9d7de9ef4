//! Convenience result type alias for Servis.

use crate::error::AppError;

/// A specialized `Result` type for Servis operations.
pub type AppResult<T> = Result<T, AppError>;
