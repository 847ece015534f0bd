//! # Collaborator contracts
//!
//! The order APIs never talk to a concrete backend or HTTP client. Instead, they are constructed with values that
//! implement the traits in this module:
//!
//! * [`OrderStore`] persists orders with upsert semantics and lists them back.
//! * [`ProductStore`] answers point lookups against the product catalog, and accepts catalog updates.
//! * [`AddressNormalizer`] maps a free-text address onto its canonical form (typically by asking an external address
//!   oracle).
//!
//! [`crate::MemoryDatabase`] and [`crate::SqliteDatabase`] implement both storage traits.
mod address_normalizer;
mod order_store;
mod product_store;

pub use address_normalizer::{AddressLookupError, AddressNormalizer};
pub use order_store::OrderStore;
pub use product_store::ProductStore;
use thiserror::Error;

/// Errors surfaced by the storage collaborators. The intake APIs treat these as opaque.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("The store's internal lock was poisoned: {0}")]
    LockPoisoned(String),
    #[error("Stored data is corrupt: {0}")]
    CorruptData(String),
}

#[cfg(feature = "sqlite")]
impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}
