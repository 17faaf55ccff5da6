use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::messaging::MessagingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ConfigError,
    ValidationError,
    ProviderError,
    UnknownError,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Missing required environment variables: {}.", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("Full name, WhatsApp number, and message template are required.")]
    MissingFields,

    #[error(
        "Phone number must be in valid E.164 format (optional leading +, digits only, 7-15 digits), e.g. +15551234567"
    )]
    InvalidPhone,

    #[error("{0}")]
    Provider(String),

    #[error("Unexpected server error")]
    Unknown,
}

impl DispatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DispatchError::MissingConfig(_) => ErrorCategory::ConfigError,
            DispatchError::MissingFields | DispatchError::InvalidPhone => {
                ErrorCategory::ValidationError
            }
            DispatchError::Provider(_) => ErrorCategory::ProviderError,
            DispatchError::Unknown => ErrorCategory::UnknownError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCategory::ConfigError
            | ErrorCategory::ProviderError
            | ErrorCategory::UnknownError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MessagingError> for DispatchError {
    fn from(err: MessagingError) -> Self {
        match err {
            MessagingError::Provider(message) => DispatchError::Provider(message),
            MessagingError::Other(e) => {
                tracing::error!(error = ?e, "unexpected messaging failure");
                DispatchError::Unknown
            }
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), axum::Json(body)).into_response()
    }
}
