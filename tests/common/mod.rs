#![allow(dead_code)]

use async_trait::async_trait;
use chain_orchestrator::events::{EventSerializer, SerializationError, TransactionEvent};
use chain_orchestrator::ports::{EventPublisher, PublishError, PublishResult, RequestContext};
use chain_orchestrator::use_cases::PublishTransaction;
use chain_orchestrator::AppState;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PublishedMessage {
    pub request_id: String,
    pub message: String,
    pub partition_key: String,
}

/// Publisher double that records every call and answers with a fixed outcome.
#[derive(Clone, Default)]
pub struct StubPublisher {
    failure: Option<PublishError>,
    calls: Arc<Mutex<Vec<PublishedMessage>>>,
}

impl StubPublisher {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(error: PublishError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PublishedMessage> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for StubPublisher {
    async fn publish(
        &self,
        ctx: &RequestContext,
        message: &str,
        partition_key: &str,
    ) -> PublishResult {
        self.calls.lock().unwrap().push(PublishedMessage {
            request_id: ctx.request_id.clone(),
            message: message.to_string(),
            partition_key: partition_key.to_string(),
        });

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub fn app_state(publisher: &StubPublisher) -> AppState {
    AppState {
        publish_transaction: Arc::new(PublishTransaction::new(Arc::new(publisher.clone()))),
        request_timeout: Duration::from_secs(5),
        log_request_body: false,
    }
}

/// Serializer double that rejects every envelope.
pub struct FailingSerializer;

impl EventSerializer for FailingSerializer {
    fn serialize(&self, _event: &TransactionEvent<'_>) -> Result<String, SerializationError> {
        Err(SerializationError("payload holds a non-encodable value".to_string()))
    }
}

pub fn app_state_with_failing_serializer(publisher: &StubPublisher) -> AppState {
    let use_case = PublishTransaction::new(Arc::new(publisher.clone()))
        .with_serializer(Arc::new(FailingSerializer));

    AppState {
        publish_transaction: Arc::new(use_case),
        ..app_state(publisher)
    }
}
