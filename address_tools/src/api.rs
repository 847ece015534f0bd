use std::sync::Arc;

use log::*;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::AddressApiConfig,
    data_objects::{AddressProperties, AddressSearchResult},
    AddressApiError,
};

#[derive(Clone)]
pub struct AddressApi {
    search_url: Url,
    client: Arc<Client>,
}

impl std::fmt::Debug for AddressApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AddressApi ({})", self.search_url)
    }
}

impl AddressApi {
    pub fn new(config: AddressApiConfig) -> Result<Self, AddressApiError> {
        let search_url = Url::parse(&config.search_url)
            .map_err(|e| AddressApiError::Initialization(format!("Invalid search URL {}. {e}", config.search_url)))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AddressApiError::Initialization(e.to_string()))?;
        Ok(Self { search_url, client: Arc::new(client) })
    }

    async fn get_query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, AddressApiError> {
        trace!("🗺️ Sending address query to {}: {params:?}", self.search_url);
        let response = self.client.get(self.search_url.clone()).query(params).send().await?;
        if response.status().is_success() {
            trace!("🗺️ Address query successful. {}", response.status());
            let body = response.text().await?;
            serde_json::from_str::<T>(&body).map_err(|e| AddressApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await?;
            Err(AddressApiError::QueryError { status, message })
        }
    }

    /// Search for an address. The three inputs are sent, URL-encoded, as the `q`, `city` and `postcode` parameters.
    pub async fn search(
        &self,
        address: &str,
        city: &str,
        postal_code: &str,
    ) -> Result<AddressSearchResult, AddressApiError> {
        let params = [("q", address), ("city", city), ("postcode", postal_code)];
        let result = self.get_query::<AddressSearchResult>(&params).await?;
        debug!("🗺️ Address search for '{address}, {postal_code} {city}' returned {} features", result.features.len());
        Ok(result)
    }

    /// The properties of the top-ranked feature for the given address. Returns [`AddressApiError::NoMatch`] if the
    /// search came back empty, or if the service rejected the query itself (4xx), e.g. when `q` is too short.
    pub async fn best_match(
        &self,
        address: &str,
        city: &str,
        postal_code: &str,
    ) -> Result<AddressProperties, AddressApiError> {
        let result = match self.search(address, city, postal_code).await {
            Ok(result) => result,
            Err(AddressApiError::QueryError { status, message }) if (400..500).contains(&status) => {
                debug!("🗺️ Address query for '{address}, {postal_code} {city}' was rejected ({status}): {message}");
                return Err(AddressApiError::NoMatch);
            },
            Err(e) => return Err(e),
        };
        result.into_best_match().ok_or(AddressApiError::NoMatch)
    }
}
