use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use super::response::{ErrorBody, ErrorEnvelope};

/// Client-facing message for any fault that escaped a handler
pub const GENERIC_FAULT_MESSAGE: &str = "Internal server error";

/// Every failure a request can end in.
///
/// Each variant carries a fixed status and a literal client message; real
/// causes of `Unhandled` are only ever logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing or invalid token format")]
    MissingOrMalformedToken,

    #[error("JWT secret is not configured")]
    MisconfiguredServer,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid role for user {0}")]
    InvalidRole(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unhandled error: {0}")]
    Unhandled(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials
            | ApiError::MissingOrMalformedToken
            | ApiError::ExpiredToken
            | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidRole(_) | ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MisconfiguredServer | ApiError::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to send to the client.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Unhandled(_) => GENERIC_FAULT_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Service faults travel in the error envelope; everything raised by the
    /// authentication layer keeps the bare `{ error }` body.
    fn uses_envelope(&self) -> bool {
        matches!(self, ApiError::Forbidden(_) | ApiError::NotFound(_))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Unhandled(ref e) = self {
            error!(error = ?e, "Unhandled error while serving request");
        }

        if self.uses_envelope() {
            let body = ErrorEnvelope::new(status.as_u16(), self.client_message());
            (status, Json(body)).into_response()
        } else {
            let body = ErrorBody {
                error: self.client_message(),
            };
            (status, Json(body)).into_response()
        }
    }
}
