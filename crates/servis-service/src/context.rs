//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};

use servis_core::types::UserId;
use servis_entity::user::UserRole;

/// Who is acting on the current request.
///
/// Built by the auth extractor from verified token claims and passed into
/// every service method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// Display name from the token, for logs.
    pub name: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole, name: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            name: name.into(),
        }
    }
}
