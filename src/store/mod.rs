mod postgres;

use async_trait::async_trait;

pub use postgres::PgProductStore;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

/// Persistence contract for the product catalog.
///
/// Any method may fail with a storage error, which handlers surface as a
/// server error without retrying.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Persists a new product and returns it with the assigned identifier.
    async fn create(&self, product: ProductRequest) -> Result<Product>;

    /// Replaces the whole record matched by `product.id`.
    async fn update(&self, product: Product) -> Result<()>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Products running low on stock.
    async fn list_leftovers(&self) -> Result<Vec<Product>>;

    async fn ping(&self) -> Result<()>;
}
