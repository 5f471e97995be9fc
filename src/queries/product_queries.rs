use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

const PRODUCT_COLUMNS: &str = "id, name, category, price, quantity";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn create_product(pool: &PgPool, req: &ProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(&format!(
        r#"
        INSERT INTO products (name, category, price, quantity)
        VALUES ($1, $2, $3, $4)
        RETURNING {PRODUCT_COLUMNS}
        "#
    ))
    .bind(&req.name)
    .bind(&req.category)
    .bind(req.price)
    .bind(req.quantity)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn update_product(pool: &PgPool, product: &Product) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET
            name = $1,
            category = $2,
            price = $3,
            quantity = $4
        WHERE id = $5
        "#,
    )
    .bind(&product.name)
    .bind(&product.category)
    .bind(product.price)
    .bind(product.quantity)
    .bind(product.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_product(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn find_leftovers(pool: &PgPool, threshold: i32) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE quantity < $1 ORDER BY id"
    ))
    .bind(threshold)
    .fetch_all(pool)
    .await?;

    Ok(products)
}
