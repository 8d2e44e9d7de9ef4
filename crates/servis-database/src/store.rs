//! Persistence seams used by the service layer.
//!
//! Orders, users and technicians are read-only from here; notifications are
//! write-only.

use async_trait::async_trait;

use servis_core::result::AppResult;
use servis_core::types::{OrderId, PaymentId, UserId};
use servis_entity::notification::{NewNotification, Notification};
use servis_entity::order::Order;
use servis_entity::payment::{NewPayment, Payment, PaymentChanges};
use servis_entity::technician::Technician;

/// Read access to orders.
#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    /// Find an order by id.
    async fn find_order(&self, id: OrderId) -> AppResult<Option<Order>>;
}

/// Read access to technician profiles.
#[async_trait]
pub trait TechnicianStore: Send + Sync + 'static {
    /// Find the technician profile owned by a user.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Option<Technician>>;
}

/// Payment persistence.
#[async_trait]
pub trait PaymentStore: Send + Sync + 'static {
    /// Find a payment by id.
    async fn find_payment(&self, id: PaymentId) -> AppResult<Option<Payment>>;

    /// Find the payment attached to an order.
    async fn find_by_order(&self, order_id: OrderId) -> AppResult<Option<Payment>>;

    /// Insert a payment. A second payment for the same order fails with
    /// `ErrorKind::BadRequest`.
    async fn create_payment(&self, payment: &NewPayment) -> AppResult<Payment>;

    /// Apply a partial update and return the stored row.
    async fn update_payment(&self, id: PaymentId, changes: &PaymentChanges) -> AppResult<Payment>;
}

/// Notification persistence.
#[async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    /// Insert a notification.
    async fn create_notification(&self, notification: &NewNotification) -> AppResult<Notification>;
}

/// Message shared by the duplicate pre-check and the unique index.
pub const DUPLICATE_PAYMENT: &str = "Payment already exists for this order";
