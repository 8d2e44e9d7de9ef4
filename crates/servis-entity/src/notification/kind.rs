//! Notification type enumeration.

use serde::{Deserialize, Serialize};

/// What a notification is about. Stored as upper-case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// Order lifecycle events.
    Order,
    /// Payment recorded or confirmed.
    Payment,
    /// System-level notices.
    System,
}

impl NotificationKind {
    /// Return the kind as stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "ORDER",
            Self::Payment => "PAYMENT",
            Self::System => "SYSTEM",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
