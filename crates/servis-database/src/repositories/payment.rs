//! Payment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use servis_core::error::{AppError, ErrorKind};
use servis_core::result::AppResult;
use servis_core::types::{OrderId, PaymentId};
use servis_entity::payment::{NewPayment, Payment, PaymentChanges};

use crate::store::{DUPLICATE_PAYMENT, PaymentStore};

/// Repository for the `payments` table.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStore for PaymentRepository {
    async fn find_payment(&self, id: PaymentId) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find payment", e))
    }

    async fn find_by_order(&self, order_id: OrderId) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE order_id = $1")
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find order payment", e)
            })
    }

    async fn create_payment(&self, p: &NewPayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (id, order_id, amount, method, status, transaction_ref, paid_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(PaymentId::new())
        .bind(p.order_id)
        .bind(p.amount)
        .bind(p.method)
        .bind(p.status)
        .bind(&p.transaction_ref)
        .bind(p.paid_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if duplicate {
                AppError::bad_request(DUPLICATE_PAYMENT)
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create payment", e)
            }
        })
    }

    async fn update_payment(&self, id: PaymentId, c: &PaymentChanges) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "UPDATE payments SET \
                amount = COALESCE($2, amount), \
                method = COALESCE($3, method), \
                status = COALESCE($4, status), \
                transaction_ref = CASE WHEN $5 THEN $6 ELSE transaction_ref END, \
                paid_at = COALESCE(paid_at, $7), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(c.amount)
        .bind(c.method)
        .bind(c.status)
        .bind(c.transaction_ref.is_some())
        .bind(c.transaction_ref.clone().flatten())
        .bind(c.paid_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update payment", e))?
        .ok_or_else(|| AppError::not_found("Payment not found"))
    }
}
