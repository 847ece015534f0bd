//! A small client for the national address search service (`api-adresse.data.gouv.fr`).
//!
//! The service geocodes free-form French addresses. [`AddressApi::search`] returns the full GeoJSON feature
//! collection, while [`AddressApi::best_match`] returns only the properties of the top-ranked feature.
mod api;
mod config;
mod error;

mod data_objects;

pub use api::AddressApi;
pub use config::{AddressApiConfig, DEFAULT_ADDRESS_API_URL, DEFAULT_TIMEOUT_SECS};
pub use data_objects::{AddressFeature, AddressProperties, AddressSearchResult, Geometry};
pub use error::AddressApiError;
