//! Notification repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use servis_core::error::{AppError, ErrorKind};
use servis_core::result::AppResult;
use servis_core::types::NotificationId;
use servis_entity::notification::{NewNotification, Notification};

use crate::store::NotificationStore;

/// Insert-only access to the `notifications` table.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn create_notification(&self, n: &NewNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, user_id, title, body, type, related_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(NotificationId::new())
        .bind(n.user_id)
        .bind(&n.title)
        .bind(&n.body)
        .bind(n.kind.as_str())
        .bind(&n.related_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }
}
