pub mod adapters;
pub mod cli;
pub mod config;
pub mod docs;
pub mod domain;
pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod ports;
pub mod schemas;
pub mod serverless;
pub mod startup;
pub mod use_cases;
pub mod utils;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::middleware::catch_panic::panic_response;
use crate::middleware::request_logger::{request_logger_middleware, RequestLogSettings};
use crate::use_cases::PublishTransaction;

#[derive(Clone)]
pub struct AppState {
    pub publish_transaction: Arc<PublishTransaction>,
    pub request_timeout: Duration,
    pub log_request_body: bool,
}

pub fn create_app(state: AppState) -> Router {
    let log_settings = RequestLogSettings {
        log_body: state.log_request_body,
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/transaction", post(handlers::transaction::post_transaction))
        .route("/walletbalance", get(handlers::wallet_balance))
        .route("/transaction-status", get(handlers::transaction_status))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum::middleware::from_fn_with_state(
            log_settings,
            request_logger_middleware,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
