use log::trace;
use sqlx::SqliteConnection;

use crate::db_types::Product;

pub async fn fetch_product(product_id: &str, conn: &mut SqliteConnection) -> Result<Option<Product>, sqlx::Error> {
    let product = sqlx::query_as("SELECT id, name, price FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_optional(conn)
        .await?;
    Ok(product)
}

pub async fn upsert_product(product: &Product, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
            INSERT INTO products (id, name, price) VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                price = excluded.price,
                updated_at = CURRENT_TIMESTAMP;
        "#,
    )
    .bind(&product.id)
    .bind(&product.name)
    .bind(product.price.value())
    .execute(conn)
    .await?;
    trace!("🗃️ Product {} saved", product.id);
    Ok(())
}

pub async fn fetch_all_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, sqlx::Error> {
    let products = sqlx::query_as("SELECT id, name, price FROM products ORDER BY id").fetch_all(conn).await?;
    Ok(products)
}
