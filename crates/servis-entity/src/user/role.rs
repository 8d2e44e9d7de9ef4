//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three kinds of account in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Places orders and pays for them.
    Customer,
    /// Works on assigned orders and records their payments.
    Technician,
    /// Full back-office access.
    Admin,
}

impl UserRole {
    /// Check if this role is a technician.
    pub fn is_technician(&self) -> bool {
        matches!(self, Self::Technician)
    }

    /// Return the role as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Technician => "TECHNICIAN",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = servis_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CUSTOMER" => Ok(Self::Customer),
            "TECHNICIAN" => Ok(Self::Technician),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(servis_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: CUSTOMER, TECHNICIAN, ADMIN"
            ))),
        }
    }
}
