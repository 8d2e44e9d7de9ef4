//! Payment domain entities.

pub mod method;
pub mod model;
pub mod status;

pub use method::PaymentMethod;
pub use model::{NewPayment, Payment, PaymentChanges};
pub use status::PaymentStatus;
