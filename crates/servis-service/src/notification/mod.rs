//! Notification side effects of payment events.

pub mod service;

pub use service::NotificationService;
