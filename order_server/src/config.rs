//! Server configuration.
//!
//! Every setting is read from an `OMS_*` environment variable. Missing or invalid values fall back to a default, and
//! the fallback is logged.
use std::{env, path::PathBuf};

use address_tools::AddressApiConfig;
use log::*;
use oms_common::parse_boolean_flag;

const DEFAULT_OMS_HOST: &str = "127.0.0.1";
const DEFAULT_OMS_PORT: u16 = 8370;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The SQLite URL for the order and product stores. When empty, an in-memory store is used and nothing survives a
    /// restart.
    pub database_url: String,
    pub address_api: AddressApiConfig,
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// If false, the catalog is not touched on start-up.
    pub seed: bool,
    /// A JSON catalog file. The built-in catalog is used if this is `None`.
    pub path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seed: true, path: None }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OMS_HOST.to_string(),
            port: DEFAULT_OMS_PORT,
            database_url: String::default(),
            address_api: AddressApiConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("OMS_HOST").ok().unwrap_or_else(|| DEFAULT_OMS_HOST.into());
        let port = env::var("OMS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for OMS_PORT. {e} Using the default, {DEFAULT_OMS_PORT}, instead."
                    );
                    DEFAULT_OMS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_OMS_PORT);
        let database_url = env::var("OMS_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ OMS_DATABASE_URL is not set. Orders will be kept in memory and lost when the server stops.");
            String::default()
        });
        let address_api = AddressApiConfig::new_from_env_or_default();
        let catalog = CatalogConfig::from_env_or_default();
        Self { host, port, database_url, address_api, catalog }
    }
}

impl CatalogConfig {
    pub fn from_env_or_default() -> Self {
        let seed = parse_boolean_flag(env::var("OMS_SEED_CATALOG").ok(), true);
        let path = env::var("OMS_PRODUCT_CATALOG").ok().filter(|s| !s.trim().is_empty()).map(PathBuf::from);
        match (&path, seed) {
            (_, false) => info!("🪛️ Catalog seeding is disabled"),
            (Some(p), true) => info!("🪛️ The product catalog will be loaded from {}", p.display()),
            (None, true) => info!("🪛️ OMS_PRODUCT_CATALOG is not set. Using the built-in product catalog."),
        }
        Self { seed, path }
    }
}
