//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use servis_auth::jwt::JwtDecoder;
use servis_core::config::AppConfig;
use servis_database::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, TechnicianRepository,
};
use servis_database::store::{NotificationStore, OrderStore, PaymentStore, TechnicianStore};
use servis_database::{DatabasePool, MemoryStore};
use servis_service::{NotificationService, PaymentService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Payment use cases
    pub payment_service: Arc<PaymentService>,
}

/// The store implementations the services run on.
#[derive(Clone)]
pub struct Stores {
    /// Orders (read-only).
    pub orders: Arc<dyn OrderStore>,
    /// Technician profiles (read-only).
    pub technicians: Arc<dyn TechnicianStore>,
    /// Payments.
    pub payments: Arc<dyn PaymentStore>,
    /// Notifications (write-only).
    pub notifications: Arc<dyn NotificationStore>,
}

impl Stores {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(db: &DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            orders: Arc::new(OrderRepository::new(pool.clone())),
            technicians: Arc::new(TechnicianRepository::new(pool.clone())),
            payments: Arc::new(PaymentRepository::new(pool.clone())),
            notifications: Arc::new(NotificationRepository::new(pool)),
        }
    }

    /// A single in-memory store behind every trait.
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            orders: store.clone(),
            technicians: store.clone(),
            payments: store.clone(),
            notifications: store,
        }
    }
}

impl AppState {
    /// Wire services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let notification_service = Arc::new(NotificationService::new(stores.notifications));
        let payment_service = Arc::new(PaymentService::new(
            stores.orders,
            stores.technicians,
            stores.payments,
            notification_service,
        ));

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            config: Arc::new(config),
            payment_service,
        }
    }
}
