use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Product as returned by the catalog routes.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(ToSchema)]
pub struct CreateProductInputDoc {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct CreateProductOutputDoc { pub id: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::ready,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            CreateProductInputDoc,
            CreateProductOutputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;
