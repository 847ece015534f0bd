use crate::{db_types::Order, traits::StoreError};

#[allow(async_fn_in_trait)]
pub trait OrderStore {
    /// Fetch every order in the store. No ordering is guaranteed.
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Insert the order, or fully replace the stored order with the same id. There is no versioning: the last write
    /// wins. If the order has no id, the store assigns a fresh one.
    async fn upsert_order(&self, order: Order) -> Result<(), StoreError>;
}
