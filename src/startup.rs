use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::adapters::RedisStreamPublisher;
use crate::config::Config;
use crate::use_cases::PublishTransaction;
use crate::{create_app, AppState};

/// Wires the production publisher into the use case.
pub async fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    let publisher = RedisStreamPublisher::connect(
        &config.redis_url,
        config.event_stream.clone(),
        config.event_stream_max_len,
    )
    .await
    .context("Failed to connect to Redis")?;
    tracing::info!(stream = %publisher.stream(), "Redis stream publisher initialized");

    let publish_transaction =
        PublishTransaction::new(Arc::new(publisher)).with_policy(config.validation_policy());

    Ok(AppState {
        publish_transaction: Arc::new(publish_transaction),
        request_timeout: config.request_timeout,
        log_request_body: config.log_request_body,
    })
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = build_app_state(&config).await?;
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!(
        environment = %config.environment,
        "listening on {}", addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
