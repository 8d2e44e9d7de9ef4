//! Authentication tests: every payment route requires a valid bearer token.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_missing_token_is_unauthenticated() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", &app.order_payment_path(), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Unauthenticated");
}

#[tokio::test]
async fn test_missing_token_checked_before_body() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            &app.order_payment_path(),
            Some(serde_json::json!({"amount": -5})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.payment_count().await, 0);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            &app.order_payment_path(),
            None,
            Some("not-a-jwt"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;

    let mut foreign = app.config.auth.clone();
    foreign.jwt_secret = "some-other-secret".to_string();
    let token = servis_auth::JwtEncoder::new(&foreign)
        .issue(app.admin.id, servis_entity::user::UserRole::Admin, "Mallory")
        .unwrap()
        .token;

    let response = app
        .request("GET", &app.order_payment_path(), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token signature");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
}
