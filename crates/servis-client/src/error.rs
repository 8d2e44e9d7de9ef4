//! Client error type.

use reqwest::StatusCode;
use thiserror::Error;

use servis_core::error::{AppError, ErrorKind};

/// Failure of a client call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{status}: {message}")]
    Api {
        /// HTTP status returned.
        status: StatusCode,
        /// The envelope's `message`, or the status reason.
        message: String,
        /// Per-field validation messages, when present.
        errors: Option<serde_json::Value>,
    },

    /// A success envelope arrived without `data`.
    #[error("response carried no data")]
    MissingData,
}

impl ClientError {
    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::MissingData => None,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        let details = match &err {
            ClientError::Api { errors, .. } => errors.clone(),
            _ => None,
        };
        let app = AppError::with_source(ErrorKind::ExternalService, message, err);
        match details {
            Some(d) => app.with_details(d),
            None => app,
        }
    }
}
