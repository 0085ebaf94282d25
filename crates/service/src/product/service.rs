use std::sync::Arc;

use models::product::{NewProduct, PriceRange};
use tracing::{error, info, instrument};

use super::domain::ProductView;
use super::repository::ProductRepository;
use crate::errors::ServiceError;

/// Read side of the catalog.
pub struct ProductQueryService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductQueryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// List products priced within the optional inclusive bounds.
    ///
    /// An empty result is not an error, including when `min_price > max_price`.
    ///
    /// # Examples
    /// ```
    /// use service::product::{ProductMutationService, ProductQueryService};
    /// use service::product::repository::mock::MockProductRepository;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockProductRepository::default());
    /// let writes = ProductMutationService::new(repo.clone());
    /// let reads = ProductQueryService::new(repo);
    /// tokio_test::block_on(writes.create_product("Widget", "A widget", 9.99)).unwrap();
    /// let found = tokio_test::block_on(reads.list_products(Some(5.0), Some(10.0))).unwrap();
    /// assert_eq!(found.len(), 1);
    /// let none = tokio_test::block_on(reads.list_products(Some(10.0), Some(5.0))).unwrap();
    /// assert!(none.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Result<Vec<ProductView>, ServiceError> {
        let rows = self
            .repo
            .list(PriceRange::new(min_price, max_price))
            .await
            .inspect_err(|e| error!(kind = e.kind(), err = %e, "list products failed"))?;
        info!(count = rows.len(), "list products");
        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    /// Look up one product; `Ok(None)` when no row has this id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> Result<Option<ProductView>, ServiceError> {
        let found = self
            .repo
            .get(id)
            .await
            .inspect_err(|e| error!(kind = e.kind(), err = %e, "get product failed"))?;
        Ok(found.map(ProductView::from))
    }
}

/// Write side of the catalog.
pub struct ProductMutationService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductMutationService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a product stamped with the current time and return its id.
    #[instrument(skip(self, description))]
    pub async fn create_product(&self, name: &str, description: &str, price: f64) -> Result<i32, ServiceError> {
        let id = self
            .repo
            .insert(NewProduct::new(name, description, price))
            .await
            .inspect_err(|e| error!(kind = e.kind(), err = %e, "create product failed"))?;
        info!(id, "product_created");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{SubsecRound, Utc};

    use super::*;
    use crate::product::repository::mock::{MockFailure, MockProductRepository};
    use crate::product::repository::SeaOrmProductRepository;
    use crate::test_support::get_db;

    async fn sea_orm_services() -> anyhow::Result<(
        ProductQueryService<SeaOrmProductRepository>,
        ProductMutationService<SeaOrmProductRepository>,
    )> {
        let repo = Arc::new(SeaOrmProductRepository::new(get_db().await?));
        Ok((ProductQueryService::new(repo.clone()), ProductMutationService::new(repo)))
    }

    #[tokio::test]
    async fn created_product_reads_back_with_same_fields() -> anyhow::Result<()> {
        let (reads, writes) = sea_orm_services().await?;
        let before = Utc::now().trunc_subsecs(6);

        let id = writes.create_product("Widget", "A widget", 9.99).await?;
        assert!(id > 0);

        let p = reads.get_product(id).await?.expect("created product");
        assert_eq!(p.id, id);
        assert_eq!(p.name, "Widget");
        assert_eq!(p.description, "A widget");
        assert_eq!(p.price, 9.99);
        assert!(p.created_at >= before);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_absent_not_an_error() -> anyhow::Result<()> {
        let (reads, _) = sea_orm_services().await?;
        assert!(reads.get_product(424242).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn listing_respects_inclusive_price_bounds() -> anyhow::Result<()> {
        let (reads, writes) = sea_orm_services().await?;
        let cheap = writes.create_product("Pencil", "HB pencil", 0.5).await?;
        let five = writes.create_product("Notebook", "A5 notebook", 5.0).await?;
        let ten = writes.create_product("Stapler", "Desk stapler", 10.0).await?;
        let pricey = writes.create_product("Chair", "Office chair", 120.0).await?;

        let ids = |v: Vec<ProductView>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(ids(reads.list_products(None, None).await?), vec![cheap, five, ten, pricey]);
        assert_eq!(ids(reads.list_products(Some(5.0), Some(10.0)).await?), vec![five, ten]);
        assert_eq!(ids(reads.list_products(Some(10.0), None).await?), vec![ten, pricey]);
        assert_eq!(ids(reads.list_products(None, Some(4.99)).await?), vec![cheap]);
        assert!(reads.list_products(Some(10.0), Some(5.0)).await?.is_empty());
        assert!(reads.list_products(Some(500.0), None).await?.is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_receive_distinct_ids() -> anyhow::Result<()> {
        let (reads, writes) = sea_orm_services().await?;
        let writes = Arc::new(writes);

        let mut handles = Vec::new();
        for i in 0..16 {
            let writes = Arc::clone(&writes);
            handles.push(tokio::spawn(async move {
                writes.create_product(&format!("item-{i}"), "concurrent insert", i as f64).await
            }));
        }

        let mut ids = HashSet::new();
        for h in handles {
            ids.insert(h.await??);
        }
        assert_eq!(ids.len(), 16);

        let listed = reads.list_products(None, None).await?;
        assert_eq!(listed.len(), 16);
        assert_eq!(listed.iter().map(|p| p.id).collect::<HashSet<_>>(), ids);
        Ok(())
    }

    #[tokio::test]
    async fn storage_outage_surfaces_as_unavailable() {
        let repo = Arc::new(MockProductRepository::failing(MockFailure::Unavailable));
        let reads = ProductQueryService::new(repo.clone());
        let writes = ProductMutationService::new(repo);

        assert!(matches!(reads.list_products(None, None).await, Err(ServiceError::Unavailable(_))));
        assert!(matches!(reads.get_product(1).await, Err(ServiceError::Unavailable(_))));
        assert!(matches!(
            writes.create_product("Widget", "A widget", 1.0).await,
            Err(ServiceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn rejected_insert_surfaces_as_bad_input() {
        let repo = Arc::new(MockProductRepository::failing(MockFailure::Constraint));
        let writes = ProductMutationService::new(repo);
        assert!(matches!(
            writes.create_product("Widget", "A widget", 1.0).await,
            Err(ServiceError::BadInput(_))
        ));
    }

    #[tokio::test]
    async fn mock_repository_matches_listing_semantics() -> anyhow::Result<()> {
        let repo = Arc::new(MockProductRepository::default());
        let reads = ProductQueryService::new(repo.clone());
        let writes = ProductMutationService::new(repo);
        let a = writes.create_product("A", "a", 3.0).await?;
        let b = writes.create_product("B", "b", 8.0).await?;
        assert_eq!(b, a + 1);
        assert_eq!(reads.list_products(Some(3.0), Some(3.0)).await?.len(), 1);
        assert_eq!(reads.list_products(None, None).await?.len(), 2);
        Ok(())
    }
}
