use axum::{http::StatusCode, routing::get, Json, Router, extract::State};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::Health;

use crate::{observability, openapi::ApiDoc, state::ServerState};

pub mod products;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Process is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::OK)
}

#[utoipa::path(
    get, path = "/ready", tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = crate::openapi::HealthResponse),
        (status = 503, description = "Database unreachable", body = crate::openapi::HealthResponse)
    )
)]
pub async fn ready(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match models::db::test_connection(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(Health::OK)),
        Err(e) => {
            warn!(err = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health::UNAVAILABLE))
        }
    }
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: catalog routes plus health, metrics and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    observability::init_metrics();

    let ops = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    let catalog = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route("/products/:id", get(products::get));

    ops.merge(catalog)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
