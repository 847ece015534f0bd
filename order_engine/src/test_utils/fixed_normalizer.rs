use std::sync::{Arc, Mutex};

use crate::{
    db_types::NormalizedAddress,
    traits::{AddressLookupError, AddressNormalizer},
};

type Query = (String, String, String);

/// A deterministic [`AddressNormalizer`] that always returns the same result, and records how it was called.
#[derive(Debug, Clone)]
pub struct FixedNormalizer {
    result: Result<NormalizedAddress, AddressLookupError>,
    queries: Arc<Mutex<Vec<Query>>>,
}

impl FixedNormalizer {
    pub fn new(result: Result<NormalizedAddress, AddressLookupError>) -> Self {
        Self { result, queries: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn found(address: NormalizedAddress) -> Self {
        Self::new(Ok(address))
    }

    pub fn not_found() -> Self {
        Self::new(Err(AddressLookupError::AddressNotFound))
    }

    pub fn failing(reason: &str) -> Self {
        Self::new(Err(AddressLookupError::TransportError(reason.to_string())))
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().map(|q| q.len()).unwrap_or_default()
    }

    pub fn last_query(&self) -> Option<Query> {
        self.queries.lock().ok().and_then(|q| q.last().cloned())
    }
}

impl AddressNormalizer for FixedNormalizer {
    async fn normalize(
        &self,
        address_line: &str,
        city: &str,
        postal_code: &str,
    ) -> Result<NormalizedAddress, AddressLookupError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push((address_line.to_string(), city.to_string(), postal_code.to_string()));
        }
        self.result.clone()
    }
}
