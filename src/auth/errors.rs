use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::auth::repo::StoreError;

/// Handler-boundary error taxonomy. Every variant leaves the service as a
/// `{status: "error", message}` JSON payload with a mapped HTTP status.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Email already exists.")]
    DuplicateEmail,
    #[error("User not found.")]
    UserNotFound,
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateEmail,
            StoreError::Database(err) => Self::Internal(err.into()),
        }
    }
}

impl AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Internal causes are logged here and masked from the client.
        let message = match &self {
            Self::Internal(err) => {
                error!(error = %err, "request failed");
                "Something went wrong. Please try again.".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "status": "error", "message": message }))).into_response()
    }
}
