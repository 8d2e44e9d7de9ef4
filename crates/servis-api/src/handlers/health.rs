//! Health check handler.

use axum::Json;

use servis_core::types::ApiResponse;

use crate::dto::response::HealthResponse;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
