//! # servis-client
//!
//! Typed HTTP client for the payment endpoints of a Servis server:
//! `GET /orders/{id}/payment`, `POST /orders/{id}/payment` and
//! `PUT /payments/{id}`, all relative to a configurable base URL.

pub mod client;
pub mod error;
pub mod request;

pub use client::PaymentClient;
pub use error::ClientError;
pub use request::{CreatePayment, UpdatePayment};
