//! Response DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use servis_core::types::{OrderId, PaymentId};
use servis_entity::payment::{Payment, PaymentMethod, PaymentStatus};

/// Payment as returned by every payment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Payment ID.
    pub id: PaymentId,
    /// Owning order.
    pub order_id: OrderId,
    /// Amount, serialized as a decimal string.
    pub amount: Decimal,
    /// Payment method.
    pub method: PaymentMethod,
    /// Payment status.
    pub status: PaymentStatus,
    /// External reference.
    pub transaction_ref: Option<String>,
    /// Settlement time.
    pub paid_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            order_id: p.order_id,
            amount: p.amount,
            method: p.method,
            status: p.status,
            transaction_ref: p.transaction_ref,
            paid_at: p.paid_at,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the process answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}
