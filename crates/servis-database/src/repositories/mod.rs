//! PostgreSQL implementations of the store traits.

pub mod notification;
pub mod order;
pub mod payment;
pub mod technician;

pub use notification::NotificationRepository;
pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use technician::TechnicianRepository;
