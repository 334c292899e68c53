use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::ports::RequestContext;
use crate::schemas::{PublishTransactionRequest, PublishTransactionResponse};
use crate::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Parses a raw request body and runs it through the publish use case.
///
/// Shared by the HTTP and serverless transports so both report identical
/// status codes and error bodies.
pub async fn submit_transaction(
    state: &AppState,
    request_id: String,
    body: &[u8],
) -> Result<PublishTransactionResponse, AppError> {
    let request: PublishTransactionRequest = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Failed to parse request body");
        AppError::from(e)
    })?;

    let ctx = RequestContext::new(request_id).with_timeout(state.request_timeout);
    let response = state.publish_transaction.execute(&ctx, request).await?;

    Ok(response)
}

pub fn request_id_from(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[utoipa::path(
    post,
    path = "/transaction",
    request_body = PublishTransactionRequest,
    responses(
        (status = 202, description = "Transaction queued for processing", body = PublishTransactionResponse),
        (status = 400, description = "Malformed body or validation failure"),
        (status = 500, description = "Event could not be serialized or published")
    ),
    tag = "Transactions"
)]
pub async fn post_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let response = submit_transaction(&state, request_id_from(&headers), &body).await?;

    Ok((StatusCode::ACCEPTED, Json(response)))
}
