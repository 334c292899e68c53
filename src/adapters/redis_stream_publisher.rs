//! Redis Streams implementation of EventPublisher.
//!
//! Each event becomes one stream entry with two fields: `chain_type`, which
//! consumer groups filter on, and `message`, the serialized envelope.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;

use crate::ports::{EventPublisher, PublishError, PublishResult, RequestContext};

pub const CHAIN_TYPE_ATTRIBUTE: &str = "chain_type";
pub const MESSAGE_FIELD: &str = "message";

/// Redis-backed event publisher.
#[derive(Clone)]
pub struct RedisStreamPublisher {
    connection: MultiplexedConnection,
    stream: String,
    max_len: Option<usize>,
}

impl RedisStreamPublisher {
    pub async fn connect(
        redis_url: &str,
        stream: impl Into<String>,
        max_len: Option<usize>,
    ) -> redis::RedisResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let connection = client.get_multiplexed_tokio_connection().await?;

        Ok(Self {
            connection,
            stream: stream.into(),
            max_len,
        })
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }
}

/// Arguments of the `XADD` call, command name excluded.
fn xadd_args(stream: &str, max_len: Option<usize>, message: &str, partition_key: &str) -> Vec<String> {
    let mut args = vec![stream.to_string()];
    if let Some(max_len) = max_len {
        args.extend(["MAXLEN".to_string(), "~".to_string(), max_len.to_string()]);
    }
    args.extend([
        "*".to_string(),
        CHAIN_TYPE_ATTRIBUTE.to_string(),
        partition_key.to_string(),
        MESSAGE_FIELD.to_string(),
        message.to_string(),
    ]);
    args
}

#[async_trait]
impl EventPublisher for RedisStreamPublisher {
    async fn publish(
        &self,
        ctx: &RequestContext,
        message: &str,
        partition_key: &str,
    ) -> PublishResult {
        let mut cmd = redis::cmd("XADD");
        for arg in xadd_args(&self.stream, self.max_len, message, partition_key) {
            cmd.arg(arg);
        }

        let mut conn = self.connection.clone();
        let entry_id: String = cmd.query_async(&mut conn).await.map_err(|e| {
            tracing::error!(
                request_id = %ctx.request_id,
                stream = %self.stream,
                chain_type = %partition_key,
                error = %e,
                "Failed to append event to stream"
            );
            PublishError::Transport(e.to_string())
        })?;

        tracing::info!(
            request_id = %ctx.request_id,
            stream = %self.stream,
            chain_type = %partition_key,
            entry_id = %entry_id,
            "Event appended to stream"
        );

        Ok(())
    }
}
