//! API-gateway (HTTP API v2) style request/response adapter.
//!
//! Lets the intake pipeline run behind a serverless function: the event is
//! routed on `METHOD rawPath` and answered with the same status codes and
//! bodies as the HTTP server.

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::AppError;
use crate::handlers::{self, transaction};
use crate::AppState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpDescription {
    pub method: String,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequestContext {
    #[serde(default)]
    pub request_id: String,
    pub http: HttpDescription,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    pub raw_path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    pub request_context: GatewayRequestContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiGatewayResponse {
    fn json(status_code: u16, body: &Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body: body.to_string(),
        }
    }

    fn from_error(err: &AppError) -> Self {
        Self::json(err.status_code().as_u16(), &err.body())
    }

    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

impl ApiGatewayRequest {
    fn body_bytes(&self) -> Result<Vec<u8>, AppError> {
        let body = self.body.as_deref().unwrap_or_default();
        if self.is_base64_encoded {
            return base64::engine::general_purpose::STANDARD
                .decode(body)
                .map_err(|e| AppError::InvalidBody(e.to_string()));
        }
        Ok(body.as_bytes().to_vec())
    }

    fn request_id(&self) -> String {
        if self.request_context.request_id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            self.request_context.request_id.clone()
        }
    }
}

/// Routes one serverless invocation.
pub async fn handle_event(state: &AppState, event: ApiGatewayRequest) -> ApiGatewayResponse {
    let request_id = event.request_id();
    let method = event.request_context.http.method.to_uppercase();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %event.raw_path,
        "Received serverless request"
    );

    let result = match (method.as_str(), event.raw_path.as_str()) {
        ("GET", "/health") => serde_json::to_value(handlers::health_status())
            .map(|body| ApiGatewayResponse::json(200, &body))
            .map_err(AppError::from),
        ("POST", "/transaction") => match event.body_bytes() {
            Ok(body) => transaction::submit_transaction(state, request_id.clone(), &body)
                .await
                .and_then(|response| serde_json::to_value(response).map_err(AppError::from))
                .map(|body| ApiGatewayResponse::json(202, &body)),
            Err(e) => Err(e),
        },
        ("GET", "/walletbalance") => Err(AppError::NotImplemented("wallet balance endpoint")),
        ("GET", "/transaction-status") => {
            Err(AppError::NotImplemented("transaction status endpoint"))
        }
        _ => Err(AppError::NotFound),
    };

    match result {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(request_id = %request_id, error = %err, "Serverless request failed");
            ApiGatewayResponse::from_error(&err)
        }
    }
}
