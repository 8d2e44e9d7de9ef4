//! Request bodies sent by the client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use servis_entity::payment::{PaymentMethod, PaymentStatus};

/// Body of `POST /orders/{id}/payment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayment {
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
}

/// Body of `PUT /payments/{id}`. `None` fields are omitted.
///
/// `transaction_ref: Some(None)` is sent as an explicit `null` and clears
/// the stored reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<Option<String>>,
}
