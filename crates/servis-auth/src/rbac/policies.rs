//! Role-to-permission mapping.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use servis_entity::user::UserRole;

/// An action on the payment resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPermission {
    /// Read the payment of an order.
    View,
    /// Record the payment of an order.
    Create,
    /// Change an existing payment.
    Update,
}

/// Which payment actions each role may attempt.
///
/// Granting an action does not grant access to every order; ownership is
/// checked separately by [`RbacEnforcer::require_order_access`].
///
/// [`RbacEnforcer::require_order_access`]: super::RbacEnforcer::require_order_access
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    policies: HashMap<UserRole, HashSet<PaymentPermission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        use PaymentPermission::*;

        let mut policies = HashMap::new();
        policies.insert(UserRole::Customer, HashSet::from([View]));
        policies.insert(UserRole::Technician, HashSet::from([View, Create, Update]));
        policies.insert(UserRole::Admin, HashSet::from([View, Create, Update]));

        Self { policies }
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: UserRole, permission: PaymentPermission) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|perms| perms.contains(&permission))
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
