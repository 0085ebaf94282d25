use sea_orm::{DatabaseConnection, EntityTrait};
use models::product::{self, Entity as ProductEntity, NewProduct, PriceRange};
use crate::errors::ServiceError;

/// List products inside `range`, ascending by id.
pub async fn list_products(db: &DatabaseConnection, range: PriceRange) -> Result<Vec<product::Model>, ServiceError> {
    let rows = product::select_in_range(range).all(db).await?;
    Ok(rows)
}

/// Get a product by id.
pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<Option<product::Model>, ServiceError> {
    let found = ProductEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Insert a product; the database assigns the id.
pub async fn create_product(db: &DatabaseConnection, new: NewProduct) -> Result<product::Model, ServiceError> {
    let created = product::create(db, new).await?;
    Ok(created)
}
