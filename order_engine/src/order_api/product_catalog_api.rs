use std::{fmt::Debug, fs, path::Path};

use log::*;

use crate::{
    db_types::Product,
    order_api::errors::CatalogError,
    traits::{ProductStore, StoreError},
};

/// Loads and queries the product catalog.
pub struct ProductCatalogApi<P> {
    products: P,
}

impl<P> Debug for ProductCatalogApi<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProductCatalogApi")
    }
}

impl<P> ProductCatalogApi<P>
where P: ProductStore
{
    pub fn new(products: P) -> Self {
        Self { products }
    }

    pub async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, StoreError> {
        self.products.fetch_product(product_id).await
    }

    /// Upsert every product in `catalog`. Returns the number of products written.
    pub async fn seed(&self, catalog: Vec<Product>) -> Result<usize, CatalogError> {
        let n = catalog.len();
        for product in catalog {
            trace!("🗃️ Seeding product {} ({})", product.id, product.name);
            self.products.upsert_product(product).await?;
        }
        info!("🗃️ {n} products loaded into the catalog");
        Ok(n)
    }

    /// Parse a JSON array of products and seed the catalog with them.
    pub async fn seed_from_json(&self, json: &str) -> Result<usize, CatalogError> {
        let catalog = parse_catalog(json)?;
        self.seed(catalog).await
    }

    /// Read a JSON catalog file and seed the catalog with its contents.
    pub async fn seed_from_file<F: AsRef<Path>>(&self, path: F) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        debug!("🗃️ Loading product catalog from {}", path.display());
        let json = fs::read_to_string(path).map_err(|e| CatalogError::InvalidCatalog(format!("{}: {e}", path.display())))?;
        self.seed_from_json(&json).await
    }
}

/// Parse a JSON array of products, e.g. `[{"id": "p1", "name": "Widget", "price": 250}]`. Prices are in cents.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let catalog: Vec<Product> = serde_json::from_str(json).map_err(|e| CatalogError::InvalidCatalog(e.to_string()))?;
    if let Some(p) = catalog.iter().find(|p| p.id.is_empty()) {
        return Err(CatalogError::InvalidCatalog(format!("Product '{}' has an empty id", p.name)));
    }
    Ok(catalog)
}
