use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::Value;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment provider answered with a non-2xx status
    #[error("Provider error {status}: {detail}")]
    Provider { status: StatusCode, detail: Value },

    /// Webhook signature did not match the recomputed digest
    #[error("Invalid signature (expected {expected}, received {received:?})")]
    InvalidSignature { expected: String, received: String },

    /// HTTP client errors (connect, TLS, reading the body)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Body to hand back to the caller alongside the status code.
    ///
    /// Provider failures pass the provider's own body through; when the
    /// provider sent nothing, the error message is used instead.
    pub fn detail(&self) -> Value {
        match self {
            AppError::Provider { detail, .. } if !detail.is_null() => detail.clone(),
            AppError::Provider { status, .. } => Value::String(format!(
                "Request failed with status code {}",
                status.as_u16()
            )),
            AppError::HttpClient(err) => Value::String(err.to_string()),
            other => Value::String(other.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
            "detail": self.detail(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Provider { status, .. } => *status,
            AppError::InvalidSignature { .. } => StatusCode::FORBIDDEN,
            AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
