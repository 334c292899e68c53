//! Request and response bodies of the transaction intake API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::ChainType;

/// Inbound transaction intent.
///
/// Every field is optional at the wire level so that missing fields surface
/// as field-level validation errors rather than body parse errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PublishTransactionRequest {
    #[schema(example = "EVM")]
    pub chain_type: Option<String>,
    #[schema(example = "TRANSFER")]
    pub operation_type: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub payload: Option<Map<String, Value>>,
}

/// Acknowledgment returned once the intent has been handed to the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublishTransactionResponse {
    pub operation_id: String,
    pub chain_type: ChainType,
    /// Always `QUEUED`: accepted for asynchronous processing.
    pub status: String,
    pub message: String,
    pub created_at: String,
}

pub const QUEUED_STATUS: &str = "QUEUED";
pub const QUEUED_MESSAGE: &str = "Transaction queued for processing";
