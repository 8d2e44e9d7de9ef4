//! Service order entity.

pub mod model;

pub use model::Order;
