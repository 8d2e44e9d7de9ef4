//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use servis_core::types::{OrderId, TechnicianId, UserId};

/// A unit of work linking a customer with (optionally) an assigned technician.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// The customer who placed the order.
    pub customer_id: UserId,
    /// Assigned technician profile, if any.
    pub technician_id: Option<TechnicianId>,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Whether the given user placed this order.
    pub fn is_placed_by(&self, user_id: UserId) -> bool {
        self.customer_id == user_id
    }

    /// Whether the given technician profile is assigned to this order.
    pub fn is_assigned_to(&self, technician_id: TechnicianId) -> bool {
        self.technician_id == Some(technician_id)
    }
}
