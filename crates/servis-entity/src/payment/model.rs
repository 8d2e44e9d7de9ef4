//! Payment entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use servis_core::types::{OrderId, PaymentId};

use super::method::PaymentMethod;
use super::status::PaymentStatus;

/// The financial record attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: PaymentId,
    /// The order this payment settles. At most one payment per order.
    pub order_id: OrderId,
    /// Amount charged.
    pub amount: Decimal,
    /// Payment method.
    pub method: PaymentMethod,
    /// Settlement status.
    pub status: PaymentStatus,
    /// External reference (bank transfer number, e-wallet receipt, ...).
    pub transaction_ref: Option<String>,
    /// Set once, the first time the status becomes `PAID`.
    pub paid_at: Option<DateTime<Utc>>,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
    /// When the payment was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Apply a partial update in place.
    pub fn apply(&mut self, changes: &PaymentChanges, now: DateTime<Utc>) {
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }
        if let Some(method) = changes.method {
            self.method = method;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(transaction_ref) = &changes.transaction_ref {
            self.transaction_ref = transaction_ref.clone();
        }
        if self.paid_at.is_none() {
            self.paid_at = changes.paid_at;
        }
        self.updated_at = now;
    }
}

/// Data required to record a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayment {
    /// The order being paid.
    pub order_id: OrderId,
    /// Amount charged.
    pub amount: Decimal,
    /// Payment method.
    pub method: PaymentMethod,
    /// Initial status.
    pub status: PaymentStatus,
    /// External reference.
    pub transaction_ref: Option<String>,
    /// Settlement time, present when created as `PAID`.
    pub paid_at: Option<DateTime<Utc>>,
}

/// A partial update. `None` leaves the column untouched.
///
/// `transaction_ref` is doubly optional so that an explicit `null`
/// clears the reference while an absent field keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentChanges {
    /// New amount.
    pub amount: Option<Decimal>,
    /// New method.
    pub method: Option<PaymentMethod>,
    /// New status.
    pub status: Option<PaymentStatus>,
    /// New reference; `Some(None)` clears it.
    pub transaction_ref: Option<Option<String>>,
    /// Settlement time. Only written while the stored value is still null.
    pub paid_at: Option<DateTime<Utc>>,
}

impl PaymentChanges {
    /// Whether this update moves the status to `PAID`.
    pub fn sets_paid(&self) -> bool {
        self.status.is_some_and(|s| s.is_paid())
    }
}
