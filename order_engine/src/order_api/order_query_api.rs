use std::fmt::Debug;

use log::*;

use crate::{
    db_types::Order,
    traits::{OrderStore, StoreError},
};

/// Read access to the order store.
pub struct OrderQueryApi<O> {
    orders: O,
}

impl<O> Debug for OrderQueryApi<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderQueryApi")
    }
}

impl<O: Clone> Clone for OrderQueryApi<O> {
    fn clone(&self) -> Self {
        Self { orders: self.orders.clone() }
    }
}

impl<O> OrderQueryApi<O>
where O: OrderStore
{
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    /// Every order in the store. There is no filtering or pagination, and no ordering guarantee beyond what the
    /// store provides.
    pub async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.fetch_orders().await?;
        trace!("🔄️📦️ Fetched {} orders", orders.len());
        Ok(orders)
    }
}
