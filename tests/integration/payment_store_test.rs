//! POST /api/orders/{id}/payment

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_technician_records_paid_payment() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({
                "amount": 250000,
                "method": "TRANSFER",
                "status": "PAID",
                "transaction_ref": "BCA-0042",
            })),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Payment created successfully");
    let data = &response.body["data"];
    assert_eq!(data["amount"], "250000");
    assert_eq!(data["method"], "TRANSFER");
    assert_eq!(data["status"], "PAID");
    assert_eq!(data["transaction_ref"], "BCA-0042");
    assert!(data["paid_at"].is_string());

    let notifications = app.store.notifications().await;
    assert_eq!(notifications.len(), 1);
    let notification = &notifications[0];
    assert_eq!(notification.user_id, app.customer.id);
    assert_eq!(notification.title, "Pembayaran");
    assert_eq!(notification.body, "Pembayaran untuk order Anda telah dicatat");
    assert_eq!(notification.kind, "PAYMENT");
    assert_eq!(
        notification.related_id.as_deref(),
        Some(app.order_id.to_string().as_str())
    );
}

#[tokio::test]
async fn test_unpaid_payment_has_no_paid_at() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({"amount": "0", "method": "CASH", "status": "UNPAID"})),
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["data"]["paid_at"].is_null());
    assert!(response.body["data"]["transaction_ref"].is_null());
    assert_eq!(app.store.notifications().await.len(), 1);
}

#[tokio::test]
async fn test_second_payment_is_rejected() {
    let app = TestApp::new().await;
    app.create_payment("UNPAID").await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({"amount": 100, "method": "CASH", "status": "PAID"})),
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Payment already exists for this order"
    );
    assert_eq!(app.store.payment_count().await, 1);
    assert_eq!(app.store.notifications().await.len(), 1);
}

#[tokio::test]
async fn test_customer_cannot_record_payment() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({"amount": 100, "method": "CASH", "status": "PAID"})),
            Some(&app.customer.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.payment_count().await, 0);
    assert!(app.store.notifications().await.is_empty());
}

#[tokio::test]
async fn test_unassigned_technician_cannot_record_payment() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({"amount": 100, "method": "CASH", "status": "PAID"})),
            Some(&app.other_technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.payment_count().await, 0);
}

#[tokio::test]
async fn test_invalid_body_reports_each_field() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({"amount": -1, "method": "CHEQUE"})),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["success"], false);
    let errors = &response.body["errors"];
    assert_eq!(errors["amount"][0], "The amount must be at least 0.");
    assert_eq!(errors["method"][0], "The selected method is invalid.");
    assert_eq!(errors["status"][0], "The status field is required.");
    assert_eq!(app.store.payment_count().await, 0);
}

#[tokio::test]
async fn test_overlong_reference_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({
                "amount": 10,
                "method": "EWALLET",
                "status": "UNPAID",
                "transaction_ref": "x".repeat(256),
            })),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["transaction_ref"][0],
        "The transaction ref may not be greater than 255 characters."
    );
}

#[tokio::test]
async fn test_lowercase_enum_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({"amount": 10, "method": "cash", "status": "paid"})),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"]["status"][0], "The selected status is invalid.");
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let app = TestApp::new().await;
    let path = format!("/api/orders/{}/payment", uuid::Uuid::new_v4());

    let response = app
        .request(
            "POST",
            &path,
            Some(json!({"amount": 10, "method": "CASH", "status": "PAID"})),
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Order not found");
    assert!(app.store.notifications().await.is_empty());
}

#[tokio::test]
async fn test_amount_too_large_for_column_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(json!({"amount": "1000000000000", "method": "CASH", "status": "PAID"})),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["amount"][0],
        "The amount may not be greater than 999999999999.99."
    );
    assert_eq!(app.store.payment_count().await, 0);
}
