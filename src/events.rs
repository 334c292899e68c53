//! Canonical event envelope handed to the message bus.
//!
//! Downstream executors consume this shape. Adding fields is backward
//! compatible; renaming or removing one is not.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::transaction::Payload;
use crate::domain::{ChainType, OperationType, Transaction};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to serialize event: {0}")]
pub struct SerializationError(pub String);

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        SerializationError(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionEvent<'a> {
    pub operation_id: String,
    pub chain_type: ChainType,
    pub operation_type: OperationType,
    pub payload: &'a Payload,
    pub created_at: String,
}

impl<'a> TransactionEvent<'a> {
    pub fn from_transaction(tx: &'a Transaction) -> Self {
        Self {
            operation_id: tx.operation_id().to_string(),
            chain_type: tx.chain_type(),
            operation_type: tx.operation_type(),
            payload: tx.payload(),
            created_at: format_timestamp(tx.created_at()),
        }
    }
}

/// RFC3339 with second precision and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Encodes an envelope into its transport-ready wire form.
pub trait EventSerializer: Send + Sync {
    fn serialize(&self, event: &TransactionEvent<'_>) -> Result<String, SerializationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSerializer;

impl EventSerializer for JsonEventSerializer {
    fn serialize(&self, event: &TransactionEvent<'_>) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(event)?)
    }
}
