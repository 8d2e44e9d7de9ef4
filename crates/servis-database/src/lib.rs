//! # servis-database
//!
//! Persistence for Servis. The services only see the traits in [`store`];
//! [`repositories`] implements them over PostgreSQL and [`memory`] over
//! process memory for tests and local runs.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{NotificationStore, OrderStore, PaymentStore, TechnicianStore};
