use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::company::CompanyError;
use crate::generation::artifact::GenerationFailure;
use crate::mock_interview::relay::RelayError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Insufficient tokens")]
    InsufficientTokens,

    #[error("Company error: {0}")]
    Company(#[from] CompanyError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationFailure),

    #[error("RTC error: {0}")]
    Rtc(#[from] RelayError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InsufficientTokens => (
                StatusCode::PAYMENT_REQUIRED,
                "INSUFFICIENT_TOKENS",
                "Not enough tokens. Purchase more to start an interview".to_string(),
            ),
            AppError::Company(e @ CompanyError::UpstreamFetch { .. }) => {
                tracing::error!("Company lookup failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Could not retrieve company information".to_string(),
                )
            }
            AppError::Company(e @ CompanyError::MalformedResponse(_)) => {
                tracing::error!("Company lookup failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_UPSTREAM",
                    "Company information could not be interpreted".to_string(),
                )
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (StatusCode::BAD_GATEWAY, "GENERATION_FAILED", e.to_string())
            }
            AppError::Rtc(e) => {
                tracing::error!("RTC connection error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RTC_ERROR",
                    "Failed to establish RTC connection".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
