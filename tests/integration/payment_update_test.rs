//! PUT /api/payments/{id}

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_marking_paid_stamps_time_and_notifies() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{payment_id}"),
            Some(json!({"status": "PAID", "transaction_ref": "OVO-77"})),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Payment updated successfully");
    let data = &response.body["data"];
    assert_eq!(data["status"], "PAID");
    assert_eq!(data["transaction_ref"], "OVO-77");
    assert_eq!(data["amount"], "150000");
    assert!(data["paid_at"].is_string());

    let notifications = app.store.notifications().await;
    assert_eq!(notifications.len(), 2);
    let confirmed = &notifications[1];
    assert_eq!(confirmed.user_id, app.customer.id);
    assert_eq!(confirmed.title, "Pembayaran Dikonfirmasi");
    assert_eq!(confirmed.body, "Pembayaran Anda telah dikonfirmasi");
    assert_eq!(confirmed.kind, "PAYMENT");
}

#[tokio::test]
async fn test_paid_at_is_set_only_once() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("PAID").await;
    let path = format!("/api/payments/{payment_id}");

    let first = app
        .request("GET", &app.order_payment_path(), None, Some(&app.admin.token))
        .await;
    let paid_at = first.body["data"]["paid_at"].clone();
    assert!(paid_at.is_string());

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({"status": "PAID", "amount": 175000})),
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["paid_at"], paid_at);
    assert_eq!(response.body["data"]["amount"], "175000");
    // Already paid, so only the store notification exists.
    assert_eq!(app.store.notifications().await.len(), 1);
}

#[tokio::test]
async fn test_leaving_paid_keeps_paid_at() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("PAID").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{payment_id}"),
            Some(json!({"status": "REFUNDED"})),
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "REFUNDED");
    assert!(response.body["data"]["paid_at"].is_string());
}

#[tokio::test]
async fn test_explicit_null_clears_reference() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;
    let path = format!("/api/payments/{payment_id}");

    app.request(
        "PUT",
        &path,
        Some(json!({"transaction_ref": "REF-1"})),
        Some(&app.technician.token),
    )
    .await;

    let untouched = app
        .request(
            "PUT",
            &path,
            Some(json!({"method": "EWALLET"})),
            Some(&app.technician.token),
        )
        .await;
    assert_eq!(untouched.body["data"]["transaction_ref"], "REF-1");
    assert_eq!(untouched.body["data"]["method"], "EWALLET");

    let cleared = app
        .request(
            "PUT",
            &path,
            Some(json!({"transaction_ref": null})),
            Some(&app.technician.token),
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert!(cleared.body["data"]["transaction_ref"].is_null());
}

#[tokio::test]
async fn test_customer_cannot_update() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{payment_id}"),
            Some(json!({"status": "PAID"})),
            Some(&app.customer.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Unauthorized");

    let show = app
        .request("GET", &app.order_payment_path(), None, Some(&app.customer.token))
        .await;
    assert_eq!(show.body["data"]["status"], "UNPAID");
}

#[tokio::test]
async fn test_negative_amount_is_rejected() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{payment_id}"),
            Some(json!({"amount": -10, "status": "LOST"})),
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["amount"][0],
        "The amount must be at least 0."
    );
    assert_eq!(
        response.body["errors"]["status"][0],
        "The selected status is invalid."
    );
}

#[tokio::test]
async fn test_unknown_payment() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{}", uuid::Uuid::new_v4()),
            Some(json!({"status": "PAID"})),
            Some(&app.admin.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Payment not found");

    let malformed = app
        .request(
            "PUT",
            "/api/payments/123",
            Some(json!({"status": "PAID"})),
            Some(&app.admin.token),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customer_with_invalid_body_is_forbidden() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{payment_id}"),
            Some(json!({"amount": -5})),
            Some(&app.customer.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.body.get("errors").is_none());
}

#[tokio::test]
async fn test_unknown_payment_with_invalid_body_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{}", uuid::Uuid::nil()),
            Some(json!({"status": "BOGUS"})),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Payment not found");
}

#[tokio::test]
async fn test_undecodable_body_is_rejected_after_lookup() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;
    let path = format!("/api/payments/{payment_id}");

    let forbidden = app
        .request(
            "PUT",
            &path,
            Some(json!({"amount": "lots"})),
            Some(&app.customer.token),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let invalid = app
        .request(
            "PUT",
            &path,
            Some(json!({"amount": "lots"})),
            Some(&app.technician.token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_null_amount_is_rejected() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{payment_id}"),
            Some(json!({"amount": null, "method": null})),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["amount"][0],
        "The amount field may not be null."
    );
    assert_eq!(
        response.body["errors"]["method"][0],
        "The method field may not be null."
    );

    let show = app
        .request("GET", &app.order_payment_path(), None, Some(&app.admin.token))
        .await;
    assert_eq!(show.body["data"]["amount"], "150000");
}

#[tokio::test]
async fn test_amount_beyond_column_precision_is_rejected() {
    let app = TestApp::new().await;
    let payment_id = app.create_payment("UNPAID").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/payments/{payment_id}"),
            Some(json!({"amount": "10.005"})),
            Some(&app.technician.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["amount"][0],
        "The amount may not have more than 2 decimal places."
    );
}
