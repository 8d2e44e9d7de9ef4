//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use servis_api::state::{AppState, Stores};
use servis_api::build_router;
use servis_auth::jwt::JwtEncoder;
use servis_core::config::AppConfig;
use servis_core::types::{OrderId, TechnicianId, UserId};
use servis_database::MemoryStore;
use servis_entity::order::Order;
use servis_entity::technician::Technician;
use servis_entity::user::UserRole;

/// A seeded account and a valid token for it.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: UserId,
    pub token: String,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct access to stored rows
    pub store: Arc<MemoryStore>,
    /// Application config
    pub config: AppConfig,
    /// Owner of `order_id`
    pub customer: Actor,
    /// A customer with no orders
    pub other_customer: Actor,
    /// The technician assigned to `order_id`
    pub technician: Actor,
    /// A technician not assigned to `order_id`
    pub other_technician: Actor,
    /// An admin
    pub admin: Actor,
    /// Order placed by `customer`, assigned to `technician`
    pub order_id: OrderId,
}

impl TestApp {
    /// Create a new test application with one seeded order.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let store = Arc::new(MemoryStore::new());
        let encoder = JwtEncoder::new(&config.auth);

        let customer = actor(&encoder, "Sari", UserRole::Customer);
        let other_customer = actor(&encoder, "Dewi", UserRole::Customer);
        let technician = actor(&encoder, "Budi", UserRole::Technician);
        let other_technician = actor(&encoder, "Agus", UserRole::Technician);
        let admin = actor(&encoder, "Admin", UserRole::Admin);

        let technician_id = seed_technician(&store, technician.id).await;
        seed_technician(&store, other_technician.id).await;

        let order_id = OrderId::new();
        store
            .insert_order(Order {
                id: order_id,
                customer_id: customer.id,
                technician_id: Some(technician_id),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await;

        let state = AppState::new(config.clone(), Stores::memory(store.clone()));
        let router = build_router(state);

        Self {
            router,
            store,
            config,
            customer,
            other_customer,
            technician,
            other_technician,
            admin,
            order_id,
        }
    }

    /// `/api/orders/{order_id}/payment`
    pub fn order_payment_path(&self) -> String {
        format!("/api/orders/{}/payment", self.order_id)
    }

    /// Record a payment as the assigned technician and return its id.
    pub async fn create_payment(&self, status: &str) -> String {
        let response = self
            .request(
                "POST",
                &self.order_payment_path(),
                Some(serde_json::json!({
                    "amount": 150000,
                    "method": "CASH",
                    "status": status,
                })),
                Some(&self.technician.token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("No id in create response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Users live outside this service; an account is just an id in a token.
fn actor(encoder: &JwtEncoder, name: &str, role: UserRole) -> Actor {
    let id = UserId::new();
    let token = encoder
        .issue(id, role, name)
        .expect("Failed to issue token")
        .token;
    Actor { id, token }
}

async fn seed_technician(store: &MemoryStore, user_id: UserId) -> TechnicianId {
    let id = TechnicianId::new();
    store
        .insert_technician(Technician {
            id,
            user_id,
            created_at: Utc::now(),
        })
        .await;
    id
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
