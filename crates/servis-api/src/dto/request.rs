//! Request DTOs with validation.
//!
//! `method` and `status` arrive as plain strings so that an unknown value is
//! reported per field instead of as a body decoding failure. Amounts must fit
//! the `NUMERIC(14, 2)` column exactly.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use servis_core::error::AppError;
use servis_entity::payment::{PaymentChanges, PaymentMethod, PaymentStatus};
use servis_service::RecordPayment;

/// `POST /api/orders/{id}/payment`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    /// Amount charged.
    #[validate(
        required(message = "The amount field is required."),
        custom(function = "valid_amount")
    )]
    pub amount: Option<Decimal>,
    /// One of CASH, TRANSFER, EWALLET, OTHER.
    #[validate(
        required(message = "The method field is required."),
        custom(function = "known_method")
    )]
    pub method: Option<String>,
    /// One of UNPAID, PAID, FAILED, REFUNDED.
    #[validate(
        required(message = "The status field is required."),
        custom(function = "known_status")
    )]
    pub status: Option<String>,
    /// External reference.
    #[validate(length(
        max = 255,
        message = "The transaction ref may not be greater than 255 characters."
    ))]
    pub transaction_ref: Option<String>,
}

impl CreatePaymentRequest {
    /// Convert a validated request into service input.
    pub fn into_record(self) -> Result<RecordPayment, AppError> {
        let missing = |field: &str| AppError::validation(format!("The {field} field is required."));
        Ok(RecordPayment {
            amount: self.amount.ok_or_else(|| missing("amount"))?,
            method: self.method.ok_or_else(|| missing("method"))?.parse()?,
            status: self.status.ok_or_else(|| missing("status"))?.parse()?,
            transaction_ref: self.transaction_ref,
        })
    }
}

/// `PUT /api/payments/{id}`. Absent fields are left unchanged.
///
/// Every field is doubly optional so a present `null` can be told apart from
/// an absent field. Only `transaction_ref` may be `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePaymentRequest {
    /// New amount.
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "valid_amount"))]
    pub amount: Option<Option<Decimal>>,
    /// New method.
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "known_method"))]
    pub method: Option<Option<String>>,
    /// New status.
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "known_status"))]
    pub status: Option<Option<String>>,
    /// New reference. An explicit `null` clears it.
    #[serde(default, deserialize_with = "present")]
    #[validate(length(
        max = 255,
        message = "The transaction ref may not be greater than 255 characters."
    ))]
    pub transaction_ref: Option<Option<String>>,
}

impl UpdatePaymentRequest {
    /// Run the field rules and reject `null` where it is not allowed.
    pub fn check(&self) -> Result<(), AppError> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        if matches!(self.amount, Some(None)) {
            errors.add("amount", invalid("not_null", "The amount field may not be null."));
        }
        if matches!(self.method, Some(None)) {
            errors.add("method", invalid("not_null", "The method field may not be null."));
        }
        if matches!(self.status, Some(None)) {
            errors.add("status", invalid("not_null", "The status field may not be null."));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    /// Convert a checked request into a partial update.
    pub fn into_changes(self) -> Result<PaymentChanges, AppError> {
        Ok(PaymentChanges {
            amount: self.amount.flatten(),
            method: self
                .method
                .flatten()
                .map(|m| m.parse::<PaymentMethod>())
                .transpose()?,
            status: self
                .status
                .flatten()
                .map(|s| s.parse::<PaymentStatus>())
                .transpose()?,
            transaction_ref: self.transaction_ref,
            paid_at: None,
        })
    }
}

/// Wraps any present value, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Largest amount `NUMERIC(14, 2)` holds.
const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

fn valid_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid("min", "The amount must be at least 0."));
    }
    if amount.normalize().scale() > 2 {
        return Err(invalid(
            "decimal",
            "The amount may not have more than 2 decimal places.",
        ));
    }
    if *amount > MAX_AMOUNT {
        return Err(invalid(
            "max",
            "The amount may not be greater than 999999999999.99.",
        ));
    }
    Ok(())
}

fn known_method(method: &str) -> Result<(), ValidationError> {
    method
        .parse::<PaymentMethod>()
        .map(|_| ())
        .map_err(|_| invalid("in", "The selected method is invalid."))
}

fn known_status(status: &str) -> Result<(), ValidationError> {
    status
        .parse::<PaymentStatus>()
        .map(|_| ())
        .map_err(|_| invalid("in", "The selected status is invalid."))
}
