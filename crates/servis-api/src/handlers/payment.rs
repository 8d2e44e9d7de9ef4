//! Payment handlers: show, store, update.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use servis_core::types::{ApiResponse, OrderId, PaymentId};

use crate::dto::request::{CreatePaymentRequest, UpdatePaymentRequest};
use crate::dto::response::PaymentResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, RawJson, ValidatedJson, deferred_body, parse_id};
use crate::state::AppState;

type PaymentJson = Json<ApiResponse<PaymentResponse>>;

/// GET /api/orders/{id}/payment
pub async fn show(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(order_id): Path<String>,
) -> Result<PaymentJson, ApiError> {
    let order_id: OrderId = parse_id(&order_id, "Order not found")?;
    let payment = state.payment_service.show(&auth, order_id).await?;
    Ok(Json(ApiResponse::ok(payment.into())))
}

/// POST /api/orders/{id}/payment
pub async fn store(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(order_id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreatePaymentRequest>,
) -> Result<(StatusCode, PaymentJson), ApiError> {
    let order_id: OrderId = parse_id(&order_id, "Order not found")?;
    let payment = state
        .payment_service
        .store(&auth, order_id, req.into_record()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Payment created successfully",
            payment.into(),
        )),
    ))
}

/// PUT /api/payments/{id}
///
/// The body is checked only after the payment is found and the caller may
/// update it.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(payment_id): Path<String>,
    body: RawJson,
) -> Result<PaymentJson, ApiError> {
    let payment_id: PaymentId = parse_id(&payment_id, "Payment not found")?;
    let service = &state.payment_service;
    let current = service.authorize_update(&auth, payment_id).await?;

    let req: UpdatePaymentRequest = deferred_body(body)?;
    req.check()?;
    let payment = service.update(&auth, current, req.into_changes()?).await?;

    Ok(Json(ApiResponse::with_message(
        "Payment updated successfully",
        payment.into(),
    )))
}
