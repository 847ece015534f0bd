//! Shipping address verification.
//!
//! Orders may only ship to France. The country must be blank, "France" or "FR" (in any case), and is rewritten to the
//! canonical "France". The remaining address fields are replaced by whatever the [`AddressNormalizer`] returns as its
//! best match.
//!
//! Verification is not atomic: the country is rewritten *before* the address lookup, so a failed lookup leaves the
//! order with its canonical country but the caller's original address line, city and postal code.
use log::*;

use crate::{db_types::Order, order_api::errors::OrderIntakeError, traits::AddressNormalizer};

pub const CANONICAL_COUNTRY: &str = "France";

const ACCEPTED_COUNTRIES: [&str; 3] = ["", "france", "fr"];

/// Returns true if `country` is one of the accepted spellings of France (or blank).
pub fn is_accepted_country(country: &str) -> bool {
    ACCEPTED_COUNTRIES.iter().any(|c| c.eq_ignore_ascii_case(country))
}

/// Validate the order's country and replace its address with the normalized form.
pub async fn verify_address<N: AddressNormalizer>(order: &mut Order, normalizer: &N) -> Result<(), OrderIntakeError> {
    let country = order.address.country.as_str();
    if !is_accepted_country(country) {
        debug!("🗺️ Order {} rejected. '{country}' is not a supported shipping destination", order.label());
        return Err(OrderIntakeError::InvalidCountry(country.to_string()));
    }
    order.address.country = CANONICAL_COUNTRY.to_string();

    let address = &order.address;
    trace!("🗺️ Normalizing address for order {}: {address}", order.label());
    let normalized = normalizer.normalize(&address.address_line, &address.city, &address.postal_code).await?;
    debug!(
        "🗺️ Address for order {} normalized to '{}, {} {}'",
        order.label(),
        normalized.address_line,
        normalized.postal_code,
        normalized.city
    );
    order.address.apply(normalized);
    Ok(())
}
