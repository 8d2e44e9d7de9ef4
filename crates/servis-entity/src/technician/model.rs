//! Technician profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use servis_core::types::{TechnicianId, UserId};

/// The profile a technician user acts through.
///
/// Orders reference this profile, not the owning user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Technician {
    /// Profile identifier.
    pub id: TechnicianId,
    /// Owning user account.
    pub user_id: UserId,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}
