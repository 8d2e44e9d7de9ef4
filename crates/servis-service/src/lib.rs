//! # servis-service
//!
//! Business logic for Servis. Services receive their stores as trait
//! objects at construction time, so the same code runs over PostgreSQL or
//! the in-memory store.

pub mod context;
pub mod notification;
pub mod payment;

pub use context::RequestContext;
pub use notification::NotificationService;
pub use payment::{PaymentService, RecordPayment};
