use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::product::{Model, NewProduct, PriceRange};

use crate::errors::ServiceError;

/// Storage seam for the product services.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self, range: PriceRange) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    /// Persist a new row and return its assigned id.
    async fn insert(&self, new: NewProduct) -> Result<i32, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list(&self, range: PriceRange) -> Result<Vec<Model>, ServiceError> {
        crate::db::product_service::list_products(&self.db, range).await
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        crate::db::product_service::get_product(&self.db, id).await
    }

    async fn insert(&self, new: NewProduct) -> Result<i32, ServiceError> {
        let created = crate::db::product_service::create_product(&self.db, new).await?;
        Ok(created.id)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Failure injected into every call of a [`MockProductRepository`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum MockFailure {
        Unavailable,
        Constraint,
    }

    impl MockFailure {
        fn to_error(self) -> ServiceError {
            match self {
                MockFailure::Unavailable => ServiceError::Unavailable("connection refused".into()),
                MockFailure::Constraint => ServiceError::BadInput("NOT NULL constraint failed".into()),
            }
        }
    }

    #[derive(Default)]
    pub struct MockProductRepository {
        rows: Mutex<Vec<Model>>, // kept in id order
        failure: Option<MockFailure>,
    }

    impl MockProductRepository {
        pub fn failing(failure: MockFailure) -> Self {
            Self { rows: Mutex::default(), failure: Some(failure) }
        }

        fn check(&self) -> Result<(), ServiceError> {
            match self.failure {
                Some(f) => Err(f.to_error()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn list(&self, range: PriceRange) -> Result<Vec<Model>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|p| range.contains(p.price)).cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|p| p.id == id).cloned())
        }

        async fn insert(&self, new: NewProduct) -> Result<i32, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.last().map_or(1, |p| p.id + 1);
            rows.push(Model {
                id,
                name: new.name,
                description: new.description,
                price: new.price,
                created_at: Utc::now(),
            });
            Ok(id)
        }
    }
}
