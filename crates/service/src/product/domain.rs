use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product as returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<models::product::Model> for ProductView {
    fn from(m: models::product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_created_at_in_camel_case() {
        let view = ProductView::from(models::product::Model {
            id: 3,
            name: "Widget".into(),
            description: "A widget".into(),
            price: 9.99,
            created_at: "2024-10-01T08:30:00Z".parse().unwrap(),
        });
        let v = serde_json::to_value(&view).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["createdAt"], "2024-10-01T08:30:00Z");
        assert!(v.get("created_at").is_none());
    }
}
