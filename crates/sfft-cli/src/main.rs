mod nearby;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sfft")]
#[command(about = "Find the five food trucks closest to a location in San Francisco")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank the five nearest approved food trucks for a coordinate pair
    Nearby {
        /// Latitude of the reference point, decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the reference point, decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Emit the ranked records as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Skip the reverse-geocoding lookup for the location card
        #[arg(long)]
        skip_geocode: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = sfft_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearby {
            lat,
            lng,
            json,
            skip_geocode,
        } => nearby::run_nearby(&config, lat, lng, json, skip_geocode).await,
    }
}
