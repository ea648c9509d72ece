use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::services::CategoryError;

/// Application-level error, the single type handlers return. Maps every
/// failure to a status code and a JSON body; internal error text never
/// reaches the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing resource
    #[error("{0}")]
    NotFound(String),

    /// Malformed input, rejected before any business logic runs
    #[error("{0}")]
    BadRequest(String),

    /// Failed business-rule validation
    #[error("{0}")]
    Validation(String),

    /// Anything else; the message is logged, the client sees a generic body
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => {
                tracing::info!("{}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::BadRequest(msg) | AppError::Validation(msg) => {
                tracing::warn!("{}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<CategoryError> for AppError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::InvalidName => AppError::Validation(e.to_string()),
            CategoryError::NotFound => AppError::NotFound(e.to_string()),
            CategoryError::Repository(source) => AppError::Internal(source.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
