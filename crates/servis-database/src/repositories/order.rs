//! Order repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use servis_core::error::{AppError, ErrorKind};
use servis_core::result::AppResult;
use servis_core::types::OrderId;
use servis_entity::order::Order;

use crate::store::OrderStore;

/// Read-only access to the `orders` table.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn find_order(&self, id: OrderId) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(
            "SELECT id, customer_id, technician_id, created_at, updated_at FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))
    }
}
