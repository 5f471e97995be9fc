use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
    pub quantity: i32,
}

/// Body of the create and update calls. Storage assigns `id` on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub id: Option<i64>,
    pub name: String,
    pub category: Option<String>,
    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,
    #[serde(default)]
    pub quantity: i32,
}

impl ProductRequest {
    /// Whole-record replacement keyed by `id`.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
