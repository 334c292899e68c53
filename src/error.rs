use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::use_cases::PublishTransactionError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("validation failed")]
    Validation(Vec<ValidationError>),

    #[error("failed to serialize transaction: {0}")]
    Serialization(String),

    #[error("failed to publish transaction")]
    Publish(String),

    #[error("route not found")]
    NotFound,

    #[error("{0} is not yet implemented")]
    NotImplemented(&'static str),

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Serialization(_) | AppError::Publish(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidBody(_) => "INVALID_INPUT",
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::Serialization(_) => "SERIALIZATION_FAILED",
            AppError::Publish(_) => "PUBLISH_FAILED",
            AppError::NotFound => "NOT_FOUND",
            AppError::NotImplemented(_) => "NOT_IMPLEMENTED",
            AppError::Internal => "INTERNAL_ERROR",
        }
    }

    /// JSON error body shared by the HTTP and serverless transports.
    ///
    /// Transport details of publish failures are logged, never returned.
    pub fn body(&self) -> Value {
        let status = self.status_code().as_u16();
        match self {
            AppError::Validation(errors) => json!({
                "error": self.code(),
                "message": self.to_string(),
                "status": status,
                "details": errors,
            }),
            _ => json!({
                "error": self.code(),
                "message": self.to_string(),
                "status": status,
            }),
        }
    }
}

impl From<PublishTransactionError> for AppError {
    fn from(err: PublishTransactionError) -> Self {
        match err {
            PublishTransactionError::Validation(errors) => AppError::Validation(errors),
            PublishTransactionError::Serialization(e) => AppError::Serialization(e.0),
            PublishTransactionError::Publish(e) => AppError::Publish(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidBody(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
