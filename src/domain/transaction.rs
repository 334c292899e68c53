//! Transaction domain entity.
//! Lives for a single intake request; its published event is what survives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::{ChainType, OperationId, OperationType};

/// Caller-defined operation payload. Opaque to the pipeline.
pub type Payload = Map<String, Value>;

/// Lifecycle status inside the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Queued,
    Published,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Queued => "QUEUED",
            TransactionStatus::Published => "PUBLISHED",
            TransactionStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain entity representing a transaction intent.
#[derive(Debug, Clone)]
pub struct Transaction {
    operation_id: OperationId,
    chain_type: ChainType,
    operation_type: OperationType,
    payload: Payload,
    created_at: DateTime<Utc>,
    status: TransactionStatus,
}

impl Transaction {
    /// Chain and operation types are already validated; construction cannot fail.
    pub fn new(chain_type: ChainType, operation_type: OperationType, payload: Payload) -> Self {
        Self {
            operation_id: OperationId::generate(),
            chain_type,
            operation_type,
            payload,
            created_at: Utc::now(),
            status: TransactionStatus::Queued,
        }
    }

    pub fn operation_id(&self) -> OperationId {
        self.operation_id
    }

    pub fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn mark_published(&mut self) {
        self.status = TransactionStatus::Published;
    }

    pub fn mark_failed(&mut self) {
        self.status = TransactionStatus::Failed;
    }
}
