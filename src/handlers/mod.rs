pub mod transaction;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

pub const SERVICE_NAME: &str = "chain-orchestrator";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

pub fn health_status() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "Health"
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(health_status()))
}

pub async fn wallet_balance() -> AppError {
    tracing::info!("wallet balance endpoint called - not implemented yet");
    AppError::NotImplemented("wallet balance endpoint")
}

pub async fn transaction_status() -> AppError {
    tracing::info!("transaction status endpoint called - not implemented yet");
    AppError::NotImplemented("transaction status endpoint")
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
