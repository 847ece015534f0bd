use crate::{db_types::Product, traits::StoreError};

#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// Fetch the product with the given id. Returns `Ok(None)` if the product is not in the catalog.
    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, StoreError>;

    /// Insert the product, or replace the catalog entry with the same id.
    async fn upsert_product(&self, product: Product) -> Result<(), StoreError>;
}
