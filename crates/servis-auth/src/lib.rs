//! # servis-auth
//!
//! Authentication and authorization for Servis.
//!
//! ## Modules
//!
//! - `jwt` — HS256 access token issuing and verification
//! - `rbac` — role permissions for payment actions and order-ownership checks

pub mod jwt;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use rbac::{PaymentPermission, RbacEnforcer, RbacPolicies};
