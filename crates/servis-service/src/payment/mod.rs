//! Show, record and update the payment of an order.

pub mod service;

pub use service::{PaymentService, RecordPayment};
