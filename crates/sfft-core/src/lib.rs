pub mod app_config;
pub mod config;
pub mod coords;
pub mod distance;
pub mod ranking;
pub mod types;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use coords::parse_coordinate;
pub use distance::distance_miles;
pub use ranking::{closest_trucks, MAX_RESULTS};
pub use types::{FoodTruck, RankedTruck, UserLocation};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
