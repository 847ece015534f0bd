//! Connects the order engine's address verification to the national address search service.
use address_tools::{AddressApi, AddressApiConfig, AddressApiError};
use log::*;
use order_engine::{
    db_types::NormalizedAddress,
    traits::{AddressLookupError, AddressNormalizer},
};

#[derive(Debug, Clone)]
pub struct AddressOracle {
    api: AddressApi,
}

impl AddressOracle {
    pub fn new(config: AddressApiConfig) -> Result<Self, AddressApiError> {
        let api = AddressApi::new(config)?;
        Ok(Self { api })
    }
}

impl AddressNormalizer for AddressOracle {
    async fn normalize(
        &self,
        address_line: &str,
        city: &str,
        postal_code: &str,
    ) -> Result<NormalizedAddress, AddressLookupError> {
        let best = self.api.best_match(address_line, city, postal_code).await.map_err(lookup_error)?;
        debug!("🗺️ '{address_line}, {postal_code} {city}' normalized to '{}, {} {}'", best.name, best.postcode, best.city);
        Ok(NormalizedAddress::new(best.name, best.postcode, best.city))
    }
}

fn lookup_error(e: AddressApiError) -> AddressLookupError {
    match e {
        AddressApiError::NoMatch => AddressLookupError::AddressNotFound,
        AddressApiError::Initialization(s) | AddressApiError::RequestError(s) | AddressApiError::Timeout(s) => {
            AddressLookupError::TransportError(s)
        },
        AddressApiError::JsonError(_) | AddressApiError::QueryError { .. } => {
            AddressLookupError::InvalidResponse(e.to_string())
        },
    }
}
