//! Typed path parameter helpers.

use std::str::FromStr;

use servis_core::error::AppError;

/// Parses a typed id from a path segment.
///
/// A malformed id cannot name an existing row, so it fails as `not_found`.
pub fn parse_id<T: FromStr>(raw: &str, not_found: &str) -> Result<T, AppError> {
    raw.parse().map_err(|_| AppError::not_found(not_found))
}
