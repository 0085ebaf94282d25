use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use service::{errors::ServiceError, product::ProductView};
use tracing::{error, info, warn};

use crate::{errors::JsonApiError, observability, state::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Inclusive lower price bound
    #[serde(default, alias = "min_price")]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[serde(default, alias = "max_price")]
    pub max_price: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateProductOutput {
    pub id: i32,
}

fn service_failure(op: &'static str, e: ServiceError) -> JsonApiError {
    if e.is_storage_fault() {
        observability::STORAGE_ERRORS_TOTAL.inc();
        error!(op, kind = e.kind(), err = %e, "product operation failed");
    } else {
        warn!(op, kind = e.kind(), err = %e, "product input rejected");
    }
    JsonApiError::from(e)
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    params(ListQuery),
    responses(
        (status = 200, description = "Products within the price range, ascending by id", body = [crate::openapi::ProductDoc]),
        (status = 400, description = "Malformed price bound"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ProductView>>, JsonApiError> {
    let _timer = observability::REQUEST_DURATION.start_timer();
    observability::QUERIES_TOTAL.inc();
    let Query(q) = query.map_err(|r| JsonApiError::bad_request(r.body_text()))?;

    let list = state
        .queries
        .list_products(q.min_price, q.max_price)
        .await
        .map_err(|e| service_failure("list_products", e))?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product, or null when no product has this id", body = crate::openapi::ProductDoc),
        (status = 400, description = "Malformed id"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Option<ProductView>>, JsonApiError> {
    let _timer = observability::REQUEST_DURATION.start_timer();
    observability::QUERIES_TOTAL.inc();
    let Path(id) = id.map_err(|r| JsonApiError::bad_request(r.body_text()))?;

    let found = state
        .queries
        .get_product(id)
        .await
        .map_err(|e| service_failure("get_product", e))?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::CreateProductInputDoc,
    responses(
        (status = 200, description = "Created; returns the new id", body = crate::openapi::CreateProductOutputDoc),
        (status = 400, description = "Missing or mistyped field"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<CreateProductInput>, JsonRejection>,
) -> Result<Json<CreateProductOutput>, JsonApiError> {
    let _timer = observability::REQUEST_DURATION.start_timer();
    observability::MUTATIONS_TOTAL.inc();
    let Json(input) = input.map_err(|r| JsonApiError::bad_request(r.body_text()))?;

    info!(name = %input.name, price = input.price, "product_create_request");
    let id = state
        .mutations
        .create_product(&input.name, &input.description, input.price)
        .await
        .map_err(|e| service_failure("create_product", e))?;
    Ok(Json(CreateProductOutput { id }))
}
