//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::AuthUser;
pub use json::{RawJson, ValidatedJson, deferred_body};
pub use path::parse_id;
