use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields supplied by the caller when creating a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self { name: name.into(), description: description.into(), price }
    }
}

/// Optional inclusive bounds on `price`. Both bounds combine with AND, so an
/// inverted range (`min > max`) matches nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Products within `range`, ordered by ascending id.
pub fn select_in_range(range: PriceRange) -> Select<Entity> {
    let mut finder = Entity::find();
    if let Some(min) = range.min {
        finder = finder.filter(Column::Price.gte(min));
    }
    if let Some(max) = range.max {
        finder = finder.filter(Column::Price.lte(max));
    }
    finder.order_by_asc(Column::Id)
}

/// Insert a product stamped with the current time; the id comes from the database.
pub async fn create<C: ConnectionTrait>(db: &C, new: NewProduct) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(new.name),
        description: Set(new.description),
        price: Set(new.price),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from)
}
