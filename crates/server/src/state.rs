use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::product::{ProductMutationService, ProductQueryService, SeaOrmProductRepository};

/// Shared handler state. Cloning is cheap: the pool and services are reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub queries: Arc<ProductQueryService<SeaOrmProductRepository>>,
    pub mutations: Arc<ProductMutationService<SeaOrmProductRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmProductRepository::new(db.clone()));
        Self {
            db,
            queries: Arc::new(ProductQueryService::new(Arc::clone(&repo))),
            mutations: Arc::new(ProductMutationService::new(repo)),
        }
    }
}
