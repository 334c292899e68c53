//! Domain layer.
//! Closed vocabularies, identifiers and the transaction entity. Nothing in
//! here knows about HTTP, Redis or serialization formats.

pub mod chain_type;
pub mod operation_id;
pub mod operation_type;
pub mod transaction;

pub use chain_type::ChainType;
pub use operation_id::OperationId;
pub use operation_type::OperationType;
pub use transaction::{Transaction, TransactionStatus};

use thiserror::Error;

/// Construction-time rejections of domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid chain type: {0}")]
    InvalidChainType(String),

    #[error("invalid operation type: {0}")]
    InvalidOperationType(String),

    #[error("invalid operation id: {0}")]
    InvalidIdentifierFormat(String),
}
