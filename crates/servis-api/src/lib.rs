//! # servis-api
//!
//! HTTP API layer for Servis built on Axum.
//!
//! Provides the payment endpoints, middleware (request logging, CORS),
//! extractors, DTOs, and the mapping from `AppError` to JSON responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
