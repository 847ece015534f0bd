//! `SqliteDatabase` is a concrete implementation of an order engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements the storage traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use log::*;
use sqlx::{migrate::MigrateError, SqlitePool};

use super::db::{new_pool, orders, products};
use crate::{
    db_types::{Order, OrderId, Product},
    traits::{OrderStore, ProductStore, StoreError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SqliteDatabase ({})", self.url)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        trace!("🗃️ Created new database pool for {url}");
        Ok(Self { url: url.to_string(), pool })
    }

    /// Brings the schema up to date.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./src/sqlite/migrations").run(&self.pool).await?;
        debug!("🗃️ Migrations complete for {}", self.url);
        Ok(())
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub async fn close(&mut self) -> Result<(), sqlx::Error> {
        self.pool.close().await;
        Ok(())
    }

    /// The full product catalog, ordered by product id.
    pub async fn fetch_all_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let products = products::fetch_all_products(&mut conn).await?;
        Ok(products)
    }
}

impl OrderStore for SqliteDatabase {
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_orders(&mut conn).await
    }

    async fn upsert_order(&self, order: Order) -> Result<(), StoreError> {
        let id = order.id.clone().unwrap_or_else(OrderId::random);
        let mut tx = self.pool.begin().await?;
        orders::upsert_order(&id, &order, &mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}

impl ProductStore for SqliteDatabase {
    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let product = products::fetch_product(product_id, &mut conn).await?;
        Ok(product)
    }

    async fn upsert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        products::upsert_product(&product, &mut conn).await?;
        Ok(())
    }
}
