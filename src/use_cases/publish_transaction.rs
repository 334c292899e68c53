//! Publish transaction use case.
//! Validates an intake request, builds the transaction event and hands it to
//! the event bus through the `EventPublisher` port.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::Transaction;
use crate::events::{
    format_timestamp, EventSerializer, JsonEventSerializer, SerializationError, TransactionEvent,
};
use crate::ports::{EventPublisher, PublishError, RequestContext};
use crate::schemas::{
    PublishTransactionRequest, PublishTransactionResponse, QUEUED_MESSAGE, QUEUED_STATUS,
};
use crate::validation::{validate_publish_request, ValidationError, ValidationPolicy};

#[derive(Error, Debug)]
pub enum PublishTransactionError {
    #[error("validation failed: {}", join_violations(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error("failed to publish transaction: {0}")]
    Publish(#[from] PublishError),
}

fn join_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Use case for accepting a transaction intent and queueing it on the bus.
///
/// Holds no per-request state; one instance is shared by every transport.
pub struct PublishTransaction {
    publisher: Arc<dyn EventPublisher>,
    serializer: Arc<dyn EventSerializer>,
    policy: ValidationPolicy,
}

impl PublishTransaction {
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            publisher,
            serializer: Arc::new(JsonEventSerializer),
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_serializer(mut self, serializer: Arc<dyn EventSerializer>) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn execute(
        &self,
        ctx: &RequestContext,
        request: PublishTransactionRequest,
    ) -> Result<PublishTransactionResponse, PublishTransactionError> {
        let validated = validate_publish_request(request, &self.policy).map_err(|errors| {
            tracing::warn!(
                request_id = %ctx.request_id,
                violations = errors.len(),
                "Transaction request rejected"
            );
            PublishTransactionError::Validation(errors)
        })?;

        tracing::info!(
            request_id = %ctx.request_id,
            chain_type = %validated.chain_type,
            operation_type = %validated.operation_type,
            "Publishing transaction"
        );

        let mut tx = Transaction::new(
            validated.chain_type,
            validated.operation_type,
            validated.payload,
        );

        let message = self
            .serializer
            .serialize(&TransactionEvent::from_transaction(&tx))
            .map_err(|e| {
                tracing::error!(request_id = %ctx.request_id, error = %e, "Failed to serialize transaction event");
                e
            })?;

        let partition_key = tx.chain_type().routing_attribute();
        if let Err(e) = self.publish(ctx, &message, partition_key).await {
            tx.mark_failed();
            tracing::error!(
                request_id = %ctx.request_id,
                operation_id = %tx.operation_id(),
                chain_type = %tx.chain_type(),
                error = %e,
                "Failed to publish transaction"
            );
            return Err(e.into());
        }
        tx.mark_published();

        tracing::info!(
            request_id = %ctx.request_id,
            operation_id = %tx.operation_id(),
            chain_type = %tx.chain_type(),
            status = %tx.status(),
            "Transaction published"
        );

        Ok(PublishTransactionResponse {
            operation_id: tx.operation_id().to_string(),
            chain_type: tx.chain_type(),
            status: QUEUED_STATUS.to_string(),
            message: QUEUED_MESSAGE.to_string(),
            created_at: format_timestamp(tx.created_at()),
        })
    }

    /// Single publish attempt, bounded by the request deadline if one is set.
    async fn publish(
        &self,
        ctx: &RequestContext,
        message: &str,
        partition_key: &str,
    ) -> Result<(), PublishError> {
        let publish = self.publisher.publish(ctx, message, partition_key);

        match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, publish)
                .await
                .unwrap_or_else(|_| Err(PublishError::DeadlineExceeded(ctx.elapsed()))),
            None => publish.await,
        }
    }
}
