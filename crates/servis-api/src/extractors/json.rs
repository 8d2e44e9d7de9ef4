//! JSON bodies checked with `validator` rules.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use servis_core::error::AppError;

use crate::error::ApiError;

/// A deserialized and validated JSON body.
///
/// Validation runs as part of extraction, before the handler body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::validation(rejection.body_text()))?;

        value.validate().map_err(AppError::from)?;
        Ok(Self(value))
    }
}

/// A JSON body whose typed decoding is left to the handler.
///
/// Handlers that must look up and authorize before judging the body take
/// this and call [`deferred_body`] once those checks pass.
pub type RawJson = Result<Json<Value>, JsonRejection>;

/// Decode a [`RawJson`] body into `T`. Decoding failures are 422.
pub fn deferred_body<T: DeserializeOwned>(body: RawJson) -> Result<T, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    serde_json::from_value(value).map_err(|e| AppError::validation(e.to_string()))
}
