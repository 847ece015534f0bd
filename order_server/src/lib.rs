//! # Order management server
//! This crate hosts the RPC server for the order management service. It is responsible for:
//! Accepting new orders, checking them against the product catalog and normalizing their shipping address.
//! Listing the orders that have been stored.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/rpc/order.Service/ListOrders`: Returns every stored order.
//! * `/rpc/order.Service/CreateOrder`: Validates, normalizes and stores an order.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;

pub mod routes;
pub mod server;
