//! Writes the notifications that payment events produce.

use std::sync::Arc;

use tracing::info;

use servis_core::error::AppError;
use servis_database::store::NotificationStore;
use servis_entity::notification::{NewNotification, Notification, NotificationKind};
use servis_entity::order::Order;

const RECORDED_TITLE: &str = "Pembayaran";
const RECORDED_BODY: &str = "Pembayaran untuk order Anda telah dicatat";
const CONFIRMED_TITLE: &str = "Pembayaran Dikonfirmasi";
const CONFIRMED_BODY: &str = "Pembayaran Anda telah dikonfirmasi";

/// Creates notification records addressed to an order's customer.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService").finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// A payment was recorded for the order.
    pub async fn payment_recorded(&self, order: &Order) -> Result<Notification, AppError> {
        self.notify_customer(order, RECORDED_TITLE, RECORDED_BODY).await
    }

    /// The order's payment became `PAID`.
    pub async fn payment_confirmed(&self, order: &Order) -> Result<Notification, AppError> {
        self.notify_customer(order, CONFIRMED_TITLE, CONFIRMED_BODY).await
    }

    async fn notify_customer(
        &self,
        order: &Order,
        title: &str,
        body: &str,
    ) -> Result<Notification, AppError> {
        let notification = self
            .store
            .create_notification(&NewNotification {
                user_id: order.customer_id,
                title: title.to_string(),
                body: body.to_string(),
                kind: NotificationKind::Payment,
                related_id: Some(order.id.to_string()),
            })
            .await?;

        info!(
            notification_id = %notification.id,
            user_id = %order.customer_id,
            order_id = %order.id,
            title,
            "Notification created"
        );
        Ok(notification)
    }
}
