//! An in-process storage backend.
//!
//! `MemoryDatabase` keeps orders and products in shared hash maps. Cloning the handle is cheap and every clone sees the
//! same data, so the same value can be handed to the intake API as both its order store and its product store.
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, RwLock},
};

use log::*;

use crate::{
    db_types::{Order, OrderId, Product},
    traits::{OrderStore, ProductStore, StoreError},
};

#[derive(Clone, Default)]
pub struct MemoryDatabase {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl Debug for MemoryDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n_orders = self.orders.read().map(|o| o.len()).unwrap_or_default();
        let n_products = self.products.read().map(|p| p.len()).unwrap_or_default();
        write!(f, "MemoryDatabase ({n_orders} orders, {n_products} products)")
    }
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database pre-loaded with the given catalog.
    pub fn with_products<I: IntoIterator<Item = Product>>(products: I) -> Self {
        let products = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { orders: Arc::default(), products: Arc::new(RwLock::new(products)) }
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    error!("🗃️ In-memory store lock is poisoned. {e}");
    StoreError::LockPoisoned(e.to_string())
}

impl OrderStore for MemoryDatabase {
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders.values().cloned().collect())
    }

    async fn upsert_order(&self, mut order: Order) -> Result<(), StoreError> {
        let id = order.id.get_or_insert_with(OrderId::random).clone();
        let mut orders = self.orders.write().map_err(poisoned)?;
        match orders.insert(id.clone(), order) {
            Some(_) => debug!("🗃️ Order {id} replaced"),
            None => debug!("🗃️ Order {id} inserted"),
        }
        Ok(())
    }
}

impl ProductStore for MemoryDatabase {
    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.get(product_id).cloned())
    }

    async fn upsert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products.write().map_err(poisoned)?;
        products.insert(product.id.clone(), product);
        Ok(())
    }
}
