//! HTTP client for the public mobile-food-facility permit dataset.
//!
//! One-shot read of a JSON array of truck records; no auth, no pagination,
//! no retries. A failed fetch is surfaced to the caller, who decides how to
//! present it — there is no automatic re-request.

use std::time::Duration;

use reqwest::Client;

use sfft_core::FoodTruck;

use crate::error::DataError;
use crate::filter::filter_active;

/// Client for the public truck dataset endpoint.
///
/// Point `data_url` at a wiremock server in tests; production callers pass
/// [`sfft_core::app_config::DEFAULT_DATA_URL`] via configuration.
pub struct TruckDataClient {
    client: Client,
    data_url: String,
}

impl TruckDataClient {
    /// Creates a client with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(data_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            data_url: data_url.to_owned(),
        })
    }

    /// Fetches the full raw dataset.
    ///
    /// # Errors
    ///
    /// - [`DataError::Http`] on network failure.
    /// - [`DataError::UnexpectedStatus`] on a non-2xx response.
    /// - [`DataError::Deserialize`] if the body is not the expected JSON
    ///   array of truck records.
    pub async fn fetch_trucks(&self) -> Result<Vec<FoodTruck>, DataError> {
        let response = self.client.get(&self.data_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.data_url.clone(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DataError::Deserialize {
            context: self.data_url.clone(),
            source: e,
        })
    }

    /// Fetches the dataset and keeps only records eligible for ranking:
    /// approved, facility type `Truck`, with coordinate data present by at
    /// least one representation.
    ///
    /// # Errors
    ///
    /// Same as [`TruckDataClient::fetch_trucks`].
    pub async fn fetch_active_trucks(&self) -> Result<Vec<FoodTruck>, DataError> {
        let raw = self.fetch_trucks().await?;
        let total = raw.len();
        let active = filter_active(raw);
        tracing::debug!(total, kept = active.len(), "filtered truck dataset");
        Ok(active)
    }
}
