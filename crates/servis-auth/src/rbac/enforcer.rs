//! RBAC enforcement for payment actions and order ownership.

use tracing::warn;

use servis_core::error::AppError;
use servis_core::types::{TechnicianId, UserId};
use servis_entity::order::Order;
use servis_entity::user::UserRole;

use super::policies::{PaymentPermission, RbacPolicies};

/// Message returned for every authorization denial.
pub const FORBIDDEN_MESSAGE: &str = "Unauthorized";

/// Enforces role permissions and order ownership.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `Forbidden` unless the role may perform the action.
    pub fn require_permission(
        &self,
        role: UserRole,
        permission: PaymentPermission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            warn!(%role, ?permission, "Payment action denied for role");
            Err(AppError::forbidden(FORBIDDEN_MESSAGE))
        }
    }

    /// Fails with `Forbidden` unless the caller may see this order.
    ///
    /// Admins see every order. Customers see orders they placed. Technicians
    /// see orders assigned to their profile; a technician without a profile
    /// sees none.
    pub fn require_order_access(
        &self,
        role: UserRole,
        user_id: UserId,
        technician_id: Option<TechnicianId>,
        order: &Order,
    ) -> Result<(), AppError> {
        let allowed = match role {
            UserRole::Admin => true,
            UserRole::Customer => order.is_placed_by(user_id),
            UserRole::Technician => technician_id.is_some_and(|t| order.is_assigned_to(t)),
        };

        if allowed {
            Ok(())
        } else {
            warn!(%role, %user_id, order_id = %order.id, "Order access denied");
            Err(AppError::forbidden(FORBIDDEN_MESSAGE))
        }
    }
}
