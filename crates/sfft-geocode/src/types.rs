//! Wire types for the Mapbox geocoding v5 API, reduced to the fields the
//! location card actually needs.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub features: Vec<GeocodingFeature>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingFeature {
    /// Feature categories, e.g. `["place"]` for a city-level result.
    #[serde(default)]
    pub place_type: Vec<String>,
    /// Short name of the feature itself.
    #[serde(default)]
    pub text: String,
    /// Full human-readable address string.
    #[serde(default)]
    pub place_name: String,
}

/// Locality name and display address resolved for a coordinate pair.
/// Display-only; the ranking pipeline never reads this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlace {
    pub city: String,
    pub full_address: String,
}
