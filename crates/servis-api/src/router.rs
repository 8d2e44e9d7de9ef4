//! Route definitions for the Servis HTTP API.
//!
//! All routes are mounted under `/api`.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let timeout = Duration::from_secs(server.request_timeout_seconds);
    let body_limit = server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&server.cors);

    let api_routes = Router::new()
        .merge(payment_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Payment show / store / update
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders/{id}/payment",
            get(handlers::payment::show).post(handlers::payment::store),
        )
        .route("/payments/{id}", put(handlers::payment::update))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
