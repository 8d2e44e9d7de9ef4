//! In-memory store for tests and `provider = "memory"` runs.
//!
//! Follows the same contract as the PostgreSQL repositories, including the
//! one-payment-per-order constraint.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use servis_core::error::AppError;
use servis_core::result::AppResult;
use servis_core::types::{NotificationId, OrderId, PaymentId, UserId};
use servis_entity::notification::{NewNotification, Notification};
use servis_entity::order::Order;
use servis_entity::payment::{NewPayment, Payment, PaymentChanges};
use servis_entity::technician::Technician;

use crate::store::{
    DUPLICATE_PAYMENT, NotificationStore, OrderStore, PaymentStore, TechnicianStore,
};

#[derive(Debug, Default)]
struct Tables {
    technicians: Vec<Technician>,
    orders: HashMap<OrderId, Order>,
    payments: HashMap<PaymentId, Payment>,
    notifications: Vec<Notification>,
}

/// All tables behind a single lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a technician profile.
    pub async fn insert_technician(&self, technician: Technician) {
        self.tables.write().await.technicians.push(technician);
    }

    /// Seed an order.
    pub async fn insert_order(&self, order: Order) {
        self.tables.write().await.orders.insert(order.id, order);
    }

    /// Every notification written so far, oldest first.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.tables.read().await.notifications.clone()
    }

    /// Number of stored payments.
    pub async fn payment_count(&self) -> usize {
        self.tables.read().await.payments.len()
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn find_order(&self, id: OrderId) -> AppResult<Option<Order>> {
        Ok(self.tables.read().await.orders.get(&id).cloned())
    }
}

#[async_trait]
impl TechnicianStore for MemoryStore {
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Option<Technician>> {
        let tables = self.tables.read().await;
        Ok(tables
            .technicians
            .iter()
            .find(|t| t.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl PaymentStore for MemoryStore {
    async fn find_payment(&self, id: PaymentId) -> AppResult<Option<Payment>> {
        Ok(self.tables.read().await.payments.get(&id).cloned())
    }

    async fn find_by_order(&self, order_id: OrderId) -> AppResult<Option<Payment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .payments
            .values()
            .find(|p| p.order_id == order_id)
            .cloned())
    }

    async fn create_payment(&self, new: &NewPayment) -> AppResult<Payment> {
        let mut tables = self.tables.write().await;
        if tables.payments.values().any(|p| p.order_id == new.order_id) {
            return Err(AppError::bad_request(DUPLICATE_PAYMENT));
        }

        let now = Utc::now();
        let payment = Payment {
            id: PaymentId::new(),
            order_id: new.order_id,
            amount: new.amount,
            method: new.method,
            status: new.status,
            transaction_ref: new.transaction_ref.clone(),
            paid_at: new.paid_at,
            created_at: now,
            updated_at: now,
        };
        tables.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    async fn update_payment(&self, id: PaymentId, changes: &PaymentChanges) -> AppResult<Payment> {
        let mut tables = self.tables.write().await;
        let payment = tables
            .payments
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Payment not found"))?;
        payment.apply(changes, Utc::now());
        Ok(payment.clone())
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn create_notification(&self, new: &NewNotification) -> AppResult<Notification> {
        let notification = Notification {
            id: NotificationId::new(),
            user_id: new.user_id,
            title: new.title.clone(),
            body: new.body.clone(),
            kind: new.kind.as_str().to_string(),
            related_id: new.related_id.clone(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .notifications
            .push(notification.clone());
        Ok(notification)
    }
}
