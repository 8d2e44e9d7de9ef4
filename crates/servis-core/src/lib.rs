//! # servis-core
//!
//! Core crate for Servis. Contains configuration schemas, typed
//! identifiers, the JSON response envelope, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Servis crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
