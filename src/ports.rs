//! Capability interfaces the use cases depend on.
//! Concrete implementations live in `adapters`.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("publish deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),
}

pub type PublishResult = Result<(), PublishError>;

/// Per-request metadata threaded from the transport down to the publisher.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    started_at: Instant,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            started_at: Instant::now(),
            deadline: None,
        }
    }

    /// Sets the deadline `timeout` after creation. A timeout too large to
    /// represent leaves the request unbounded.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = self.started_at.checked_add(timeout);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Delivers an already serialized message to the event bus.
///
/// `partition_key` is attached to the message as the `chain_type` attribute so
/// that subscribers can filter on it. Implementations make a single attempt and
/// report every transport failure as [`PublishError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        ctx: &RequestContext,
        message: &str,
        partition_key: &str,
    ) -> PublishResult;
}
