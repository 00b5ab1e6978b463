pub mod client;
pub mod error;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use types::{GeocodingFeature, GeocodingResponse, ResolvedPlace};

use sfft_core::UserLocation;

/// Builds the user's reference point from raw coordinates plus a reverse
/// geocoding lookup for the display strings.
///
/// # Errors
///
/// Returns [`GeocodeError`] when the lookup fails; callers collapse that
/// into a single generic location error, never a partially-resolved
/// location.
pub async fn resolve_user_location(
    client: &GeocodeClient,
    lat: f64,
    lng: f64,
) -> Result<UserLocation, GeocodeError> {
    let place = client.reverse_geocode(lat, lng).await?;
    Ok(UserLocation {
        lat,
        lng,
        city: Some(place.city),
        full_address: Some(place.full_address),
    })
}
