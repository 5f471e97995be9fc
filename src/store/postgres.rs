use async_trait::async_trait;
use sqlx::PgPool;

use super::ProductStore;
use crate::{
    database,
    error::Result,
    models::{Product, ProductRequest},
    queries::product_queries,
};

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
    leftover_threshold: i32,
}

impl PgProductStore {
    pub fn new(pool: PgPool, leftover_threshold: i32) -> Self {
        Self {
            pool,
            leftover_threshold,
        }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        product_queries::find_all(&self.pool).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn create(&self, product: ProductRequest) -> Result<Product> {
        product_queries::create_product(&self.pool, &product).await
    }

    async fn update(&self, product: Product) -> Result<()> {
        let updated = product_queries::update_product(&self.pool, &product).await?;
        if updated == 0 {
            tracing::warn!("Update matched no product with id = [{}]", product.id);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        product_queries::delete_product(&self.pool, id).await?;
        Ok(())
    }

    async fn list_leftovers(&self) -> Result<Vec<Product>> {
        product_queries::find_leftovers(&self.pool, self.leftover_threshold).await
    }

    async fn ping(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }
}
