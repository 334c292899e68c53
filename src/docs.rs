use axum::Json;
use utoipa::OpenApi;

use crate::domain::ChainType;
use crate::handlers::{self, HealthStatus};
use crate::schemas::{PublishTransactionRequest, PublishTransactionResponse};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::transaction::post_transaction),
    components(schemas(
        PublishTransactionRequest,
        PublishTransactionResponse,
        ChainType,
        HealthStatus
    )),
    tags(
        (name = "Transactions", description = "Transaction intake"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
