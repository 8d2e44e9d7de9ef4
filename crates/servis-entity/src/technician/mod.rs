//! Technician profile entity.

pub mod model;

pub use model::Technician;
