use thiserror::Error;

use crate::traits::{AddressLookupError, StoreError};

/// Reasons an order can be rejected. Validation stops at the first failure, in this order: customer, products,
/// country, address lookup.
#[derive(Debug, Clone, Error)]
pub enum OrderIntakeError {
    #[error("customer name not completed")]
    InvalidCustomer,
    #[error("product ({0}) not found")]
    ProductNotFound(String),
    #[error("send in France only (country was '{0}')")]
    InvalidCountry(String),
    #[error("{0}")]
    AddressLookup(#[from] AddressLookupError),
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Could not read product catalog: {0}")]
    InvalidCatalog(String),
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}
