use crate::app_config::{AppConfig, DEFAULT_DATA_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// tests can drive it from a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let data_url = or_default("SFFT_DATA_URL", DEFAULT_DATA_URL);
    let mapbox_access_token = lookup("MAPBOX_ACCESS_TOKEN").ok();
    let request_timeout_secs = parse_u64("SFFT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SFFT_USER_AGENT", "sfft/0.1 (food-truck-finder)");
    let log_level = or_default("SFFT_LOG_LEVEL", "info");

    Ok(AppConfig {
        data_url,
        mapbox_access_token,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.data_url, DEFAULT_DATA_URL);
        assert!(cfg.mapbox_access_token.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "sfft/0.1 (food-truck-finder)");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn data_url_override() {
        let mut map = HashMap::new();
        map.insert("SFFT_DATA_URL", "http://localhost:9999/trucks.json");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.data_url, "http://localhost:9999/trucks.json");
    }

    #[test]
    fn mapbox_token_is_read_when_present() {
        let mut map = HashMap::new();
        map.insert("MAPBOX_ACCESS_TOKEN", "pk.test-token");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.mapbox_access_token.as_deref(), Some("pk.test-token"));
    }

    #[test]
    fn request_timeout_override() {
        let mut map = HashMap::new();
        map.insert("SFFT_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("SFFT_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SFFT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(SFFT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn token_redacted_in_debug_output() {
        let mut map = HashMap::new();
        map.insert("MAPBOX_ACCESS_TOKEN", "pk.super-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"), "got: {rendered}");
        assert!(rendered.contains("[redacted]"), "got: {rendered}");
    }
}
