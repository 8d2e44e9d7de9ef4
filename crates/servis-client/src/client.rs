//! `PaymentClient`: the three payment calls over reqwest.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use servis_core::types::{ApiResponse, OrderId, PaymentId};
use servis_entity::payment::Payment;

use crate::error::ClientError;
use crate::request::{CreatePayment, UpdatePayment};

/// HTTP client for the payment endpoints.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PaymentClient {
    /// Client for `base_url`, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` on every call.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /orders/{order_id}/payment`
    pub async fn get_payment(&self, order_id: OrderId) -> Result<Payment, ClientError> {
        let url = format!("{}/orders/{order_id}/payment", self.base_url);
        self.send(self.client.get(url)).await
    }

    /// `POST /orders/{order_id}/payment`
    pub async fn create_payment(
        &self,
        order_id: OrderId,
        body: &CreatePayment,
    ) -> Result<Payment, ClientError> {
        let url = format!("{}/orders/{order_id}/payment", self.base_url);
        self.send(self.client.post(url).json(body)).await
    }

    /// `PUT /payments/{payment_id}`
    pub async fn update_payment(
        &self,
        payment_id: PaymentId,
        body: &UpdatePayment,
    ) -> Result<Payment, ClientError> {
        let url = format!("{}/payments/{payment_id}", self.base_url);
        self.send(self.client.put(url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        debug!(status = %response.status(), url = %response.url(), "Servis response");
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        let envelope: ApiResponse<T> =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Api {
                status,
                message: format!("Malformed response body: {e}"),
                errors: None,
            })?;
        return envelope.into_data().ok_or(ClientError::MissingData);
    }

    let (message, errors) = match serde_json::from_slice::<ApiResponse<serde_json::Value>>(&bytes)
    {
        Ok(envelope) => (envelope.message, envelope.errors),
        Err(_) => (None, None),
    };

    Err(ClientError::Api {
        status,
        message: message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        }),
        errors,
    })
}
