/// Default public endpoint for the San Francisco mobile-food-facility
/// permit dataset (Socrata, no auth, no pagination).
pub const DEFAULT_DATA_URL: &str = "https://data.sfgov.org/resource/rqzj-sfat.json";

#[derive(Clone)]
pub struct AppConfig {
    /// Truck dataset endpoint.
    pub data_url: String,
    /// Mapbox access token for reverse geocoding. Optional: without it the
    /// location card falls back to bare coordinates.
    pub mapbox_access_token: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_url", &self.data_url)
            .field(
                "mapbox_access_token",
                &self.mapbox_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
