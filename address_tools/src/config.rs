use std::time::Duration;

use log::*;

pub const DEFAULT_ADDRESS_API_URL: &str = "https://api-adresse.data.gouv.fr/search/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AddressApiConfig {
    /// The full URL of the search endpoint. Query parameters are appended to it.
    pub search_url: String,
    pub timeout: Duration,
}

impl Default for AddressApiConfig {
    fn default() -> Self {
        Self { search_url: DEFAULT_ADDRESS_API_URL.to_string(), timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }
}

impl AddressApiConfig {
    pub fn new<S: Into<String>>(search_url: S, timeout: Duration) -> Self {
        Self { search_url: search_url.into(), timeout }
    }

    pub fn new_from_env_or_default() -> Self {
        let search_url = std::env::var("OMS_ADDRESS_API_URL").ok().filter(|s| !s.trim().is_empty()).unwrap_or_else(|| {
            info!("🪛️ OMS_ADDRESS_API_URL not set, using {DEFAULT_ADDRESS_API_URL}");
            DEFAULT_ADDRESS_API_URL.to_string()
        });
        let timeout = std::env::var("OMS_ADDRESS_API_TIMEOUT")
            .ok()
            .and_then(|s| {
                s.parse::<u64>()
                    .map_err(|e| warn!("🪛️ Invalid OMS_ADDRESS_API_TIMEOUT ({s}). {e}. Using the default instead."))
                    .ok()
            })
            .unwrap_or_else(|| {
                debug!("🪛️ Address lookups time out after {DEFAULT_TIMEOUT_SECS}s");
                DEFAULT_TIMEOUT_SECS
            });
        Self { search_url, timeout: Duration::from_secs(timeout) }
    }
}
