//! Role-based access control for payment actions.

pub mod enforcer;
pub mod policies;

pub use enforcer::RbacEnforcer;
pub use policies::{PaymentPermission, RbacPolicies};
