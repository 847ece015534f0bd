use thiserror::Error;

use crate::db_types::NormalizedAddress;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressLookupError {
    /// The oracle answered, but had no candidate for the address.
    #[error("address not found")]
    AddressNotFound,
    /// The oracle could not be reached, timed out, or returned a non-success status.
    #[error("Address lookup failed. {0}")]
    TransportError(String),
    /// The oracle's response could not be read or decoded.
    #[error("Invalid response from the address lookup service. {0}")]
    InvalidResponse(String),
}

/// Capability to turn a free-text address into its canonical form.
///
/// Implementations take the best match (ranking is entirely up to the implementation) and must return
/// [`AddressLookupError::AddressNotFound`] when there is no candidate at all.
#[allow(async_fn_in_trait)]
pub trait AddressNormalizer {
    async fn normalize(
        &self,
        address_line: &str,
        city: &str,
        postal_code: &str,
    ) -> Result<NormalizedAddress, AddressLookupError>;
}
