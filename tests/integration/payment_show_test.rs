//! GET /api/orders/{id}/payment

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_owner_sees_payment() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;

    let response = app
        .request(
            "GET",
            &app.order_payment_path(),
            None,
            Some(&app.customer.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["id"], payment_id.as_str());
    assert_eq!(response.body["data"]["order_id"], app.order_id.to_string());
    assert_eq!(response.body["data"]["status"], "UNPAID");
    assert!(response.body["data"]["paid_at"].is_null());
}

#[tokio::test]
async fn test_other_customer_is_forbidden() {
    let app = TestApp::new().await;
    app.create_payment("UNPAID").await;

    let response = app
        .request(
            "GET",
            &app.order_payment_path(),
            None,
            Some(&app.other_customer.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Unauthorized");
}

#[tokio::test]
async fn test_unassigned_technician_is_forbidden() {
    let app = TestApp::new().await;
    app.create_payment("UNPAID").await;

    let response = app
        .request(
            "GET",
            &app.order_payment_path(),
            None,
            Some(&app.other_technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_sees_any_payment() {
    let app = TestApp::new().await;
    app.create_payment("UNPAID").await;

    let response = app
        .request(
            "GET",
            &app.order_payment_path(),
            None,
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_order_without_payment() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            &app.order_payment_path(),
            None,
            Some(&app.customer.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Payment not found");
}

#[tokio::test]
async fn test_unknown_order() {
    let app = TestApp::new().await;
    let path = format!("/api/orders/{}/payment", uuid::Uuid::new_v4());

    let response = app
        .request("GET", &path, None, Some(&app.admin.token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Order not found");
}

#[tokio::test]
async fn test_malformed_order_id() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/orders/not-a-uuid/payment",
            None,
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Order not found");
}
