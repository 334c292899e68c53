//! Application use cases.

pub mod publish_transaction;

pub use publish_transaction::{PublishTransaction, PublishTransactionError};
