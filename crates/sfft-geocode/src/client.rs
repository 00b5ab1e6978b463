//! HTTP client for the Mapbox reverse-geocoding v5 API.
//!
//! The access token is injected at construction rather than read from
//! ambient process state, so nothing downstream carries a hidden
//! dependency on the environment.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{GeocodingResponse, ResolvedPlace};

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/";

/// Placeholder used when the API yields no usable locality or address.
const UNKNOWN_PLACE: &str = "Unknown";

/// Client for Mapbox reverse geocoding.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_base_url`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a client pointed at the production Mapbox API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        Self::with_base_url(access_token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so path joins land under the root.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url,
        })
    }

    /// Resolves a coordinate pair to a locality name and display address.
    ///
    /// Falls back to `"Unknown"` for whichever of the two the API does not
    /// supply; a reachable-but-empty response is not an error.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx response.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected
    ///   feature collection.
    pub async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<ResolvedPlace, GeocodeError> {
        let url = self.build_url(lat, lng)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: GeocodingResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("reverse_geocode({lat},{lng})"),
                source: e,
            })?;

        let place = Self::select_place(&parsed);
        tracing::debug!(city = %place.city, "reverse geocoding resolved");
        Ok(place)
    }

    /// Mapbox expects `{lng},{lat}` order in the path.
    fn build_url(&self, lat: f64, lng: f64) -> Result<Url, GeocodeError> {
        let path = format!("geocoding/v5/mapbox.places/{lng},{lat}.json");
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }

    /// Locality = first feature typed `place`; address = first feature's
    /// `place_name`. Empty strings count as missing.
    fn select_place(response: &GeocodingResponse) -> ResolvedPlace {
        let city = response
            .features
            .iter()
            .find(|f| f.place_type.iter().any(|t| t == "place"))
            .map(|f| f.text.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_PLACE)
            .to_string();

        let full_address = response
            .features
            .first()
            .map(|f| f.place_name.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_PLACE)
            .to_string();

        ResolvedPlace { city, full_address }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeocodingFeature;

    fn feature(place_type: &[&str], text: &str, place_name: &str) -> GeocodingFeature {
        GeocodingFeature {
            place_type: place_type.iter().map(|s| (*s).to_string()).collect(),
            text: text.to_string(),
            place_name: place_name.to_string(),
        }
    }

    #[test]
    fn build_url_puts_longitude_first_and_appends_token() {
        let client = GeocodeClient::with_base_url("tok", 30, "ua", "https://api.mapbox.com")
            .expect("client construction should not fail");
        let url = client.build_url(37.7749, -122.4194).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.mapbox.com/geocoding/v5/mapbox.places/-122.4194,37.7749.json?access_token=tok"
        );
    }

    #[test]
    fn select_place_picks_place_typed_feature_for_city() {
        let response = GeocodingResponse {
            features: vec![
                feature(&["address"], "123 Main St", "123 Main St, San Francisco, CA"),
                feature(&["place"], "San Francisco", "San Francisco, California"),
            ],
        };
        let place = GeocodeClient::select_place(&response);
        assert_eq!(place.city, "San Francisco");
        assert_eq!(place.full_address, "123 Main St, San Francisco, CA");
    }

    #[test]
    fn select_place_falls_back_to_unknown() {
        let place = GeocodeClient::select_place(&GeocodingResponse { features: vec![] });
        assert_eq!(place.city, "Unknown");
        assert_eq!(place.full_address, "Unknown");
    }

    #[test]
    fn select_place_treats_empty_strings_as_missing() {
        let response = GeocodingResponse {
            features: vec![feature(&["place"], "", "")],
        };
        let place = GeocodeClient::select_place(&response);
        assert_eq!(place.city, "Unknown");
        assert_eq!(place.full_address, "Unknown");
    }
}
