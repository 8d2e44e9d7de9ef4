//! Technician profile repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use servis_core::error::{AppError, ErrorKind};
use servis_core::result::AppResult;
use servis_core::types::UserId;
use servis_entity::technician::Technician;

use crate::store::TechnicianStore;

/// Read-only access to the `technicians` table.
#[derive(Debug, Clone)]
pub struct TechnicianRepository {
    pool: PgPool,
}

impl TechnicianRepository {
    /// Create a new technician repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TechnicianStore for TechnicianRepository {
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Option<Technician>> {
        sqlx::query_as::<_, Technician>(
            "SELECT id, user_id, created_at FROM technicians WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find technician profile", e)
        })
    }
}
