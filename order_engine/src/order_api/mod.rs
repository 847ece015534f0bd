//! # Order management public API
//!
//! The `order_api` module exposes the programmatic API of the order engine. The API is modular, so that clients can
//! pick the functionality they need, each backed by whichever collaborators they choose.
//!
//! * [`order_intake_api`] validates incoming orders, verifies their shipping address and stores them.
//! * [`order_query_api`] reads orders back out of the order store.
//! * [`product_catalog_api`] loads and queries the product catalog.
//!
//! # API usage
//!
//! An API instance is created by supplying the collaborators that implement the traits it needs:
//!
//! ```rust,ignore
//! use order_engine::{MemoryDatabase, OrderIntakeApi, OrderQueryApi};
//! let db = MemoryDatabase::default();
//! // MemoryDatabase implements both OrderStore and ProductStore
//! let intake = OrderIntakeApi::new(db.clone(), db.clone(), address_oracle);
//! intake.create_order(order).await?;
//! let orders = OrderQueryApi::new(db).list_orders().await?;
//! ```
pub mod errors;
pub mod order_intake_api;
pub mod order_query_api;
pub mod product_catalog_api;
