//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use servis_core::types::{NotificationId, UserId};

use super::kind::NotificationKind;

/// A message addressed to a user. Only ever inserted by the payment flows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Notification type, e.g. `PAYMENT`.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    /// Identifier of the related resource, as text.
    pub related_id: Option<String>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check whether this notification is of the given kind.
    pub fn is_kind(&self, kind: NotificationKind) -> bool {
        self.kind == kind.as_str()
    }
}

/// Data required to create a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: UserId,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Notification type.
    pub kind: NotificationKind,
    /// Identifier of the related resource.
    pub related_id: Option<String>,
}
