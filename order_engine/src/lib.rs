//! Order Engine
//!
//! The order engine holds the business logic of the order management service. It is transport-agnostic: the RPC
//! server wraps it, but nothing in here knows about HTTP.
//!
//! The library is divided into three main sections:
//! 1. Storage. The [`mod@traits`] module defines the [`OrderStore`] and [`ProductStore`] contracts. Two backends are
//!    provided: [`MemoryDatabase`], which keeps everything in shared maps, and `SqliteDatabase` (behind the `sqlite`
//!    feature, on by default).
//! 2. Address verification ([`mod@address_verifier`]). Only French addresses are accepted. Normalization itself is
//!    delegated to an [`AddressNormalizer`], so that the external geocoding service can be swapped out in tests.
//! 3. The public API ([`mod@order_api`]): [`OrderIntakeApi`] for creating orders, [`OrderQueryApi`] for listing them
//!    and [`ProductCatalogApi`] for loading the product catalog.
pub mod address_verifier;
pub mod db_types;
pub mod order_api;
pub mod traits;

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use memory::MemoryDatabase;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use order_api::{
    errors::{CatalogError, OrderIntakeError},
    order_intake_api::OrderIntakeApi,
    order_query_api::OrderQueryApi,
    product_catalog_api::{parse_catalog, ProductCatalogApi},
};
pub use traits::{AddressLookupError, AddressNormalizer, OrderStore, ProductStore, StoreError};
