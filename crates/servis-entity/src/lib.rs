//! # servis-entity
//!
//! Domain entity models for Servis. Every struct in this crate represents
//! a database table row or a domain value object. Row types derive
//! `sqlx::FromRow`; enums map onto PostgreSQL enum types.

pub mod notification;
pub mod order;
pub mod payment;
pub mod technician;
pub mod user;
