//! Payment method enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_method", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cash handed to the technician.
    Cash,
    /// Bank transfer.
    Transfer,
    /// E-wallet.
    Ewallet,
    /// Anything else.
    Other,
}

impl PaymentMethod {
    /// Return the method as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Transfer => "TRANSFER",
            Self::Ewallet => "EWALLET",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = servis_core::AppError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH" => Ok(Self::Cash),
            "TRANSFER" => Ok(Self::Transfer),
            "EWALLET" => Ok(Self::Ewallet),
            "OTHER" => Ok(Self::Other),
            _ => Err(servis_core::AppError::validation(format!(
                "Invalid payment method: '{s}'. Expected one of: CASH, TRANSFER, EWALLET, OTHER"
            ))),
        }
    }
}
