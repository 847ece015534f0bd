use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use order_engine::{
    db_types::Product,
    parse_catalog,
    traits::{AddressNormalizer, OrderStore, ProductStore},
    MemoryDatabase,
    OrderIntakeApi,
    OrderQueryApi,
    ProductCatalogApi,
    SqliteDatabase,
};

use crate::{
    config::{CatalogConfig, ServerConfig},
    errors::ServerError,
    integrations::address_oracle::AddressOracle,
    routes::{health, json_payload_error, CreateOrderRoute, ListOrdersRoute},
};

const DEFAULT_CATALOG: &str = include_str!("./default_catalog.json");

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let oracle = AddressOracle::new(config.address_api.clone())
        .map_err(|e| ServerError::InitializeError(format!("Could not create the address service client. {e}")))?;
    let srv = if config.database_url.trim().is_empty() {
        info!("💻️ Using the in-memory order store");
        let db = MemoryDatabase::new();
        seed_catalog(&config.catalog, db.clone()).await?;
        create_server_instance(config, db, oracle)?
    } else {
        let db = SqliteDatabase::new_with_url(&config.database_url, 25)
            .await
            .map_err(|e| ServerError::InitializeError(e.to_string()))?;
        db.migrate().await.map_err(|e| ServerError::InitializeError(format!("Database migration failed. {e}")))?;
        info!("💻️ Using the SQLite order store at {}", db.url());
        seed_catalog(&config.catalog, db.clone()).await?;
        create_server_instance(config, db, oracle)?
    };
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Loads the configured product catalog (or the built-in one) into the product store.
pub async fn seed_catalog<P: ProductStore>(config: &CatalogConfig, store: P) -> Result<usize, ServerError> {
    if !config.seed {
        info!("💻️ Skipping catalog seeding");
        return Ok(0);
    }
    let api = ProductCatalogApi::new(store);
    let n = match &config.path {
        Some(path) => api.seed_from_file(path).await?,
        None => api.seed(default_catalog()?).await?,
    };
    Ok(n)
}

pub fn default_catalog() -> Result<Vec<Product>, ServerError> {
    Ok(parse_catalog(DEFAULT_CATALOG)?)
}

pub fn create_server_instance<B, N>(config: ServerConfig, db: B, oracle: N) -> Result<Server, ServerError>
where
    B: OrderStore + ProductStore + Clone + Send + 'static,
    N: AddressNormalizer + Clone + Send + 'static,
{
    let srv = HttpServer::new(move || {
        let intake_api = OrderIntakeApi::new(db.clone(), db.clone(), oracle.clone());
        let query_api = OrderQueryApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("oms::access_log"))
            .app_data(web::JsonConfig::default().error_handler(json_payload_error))
            .app_data(web::Data::new(intake_api))
            .app_data(web::Data::new(query_api))
            .service(health)
            .service(ListOrdersRoute::<B>::new())
            .service(CreateOrderRoute::<B, B, N>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
