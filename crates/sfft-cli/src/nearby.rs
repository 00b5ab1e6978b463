//! The `nearby` command: resolve a reference point, fetch the candidate
//! trucks, rank them and render the result.
//!
//! The two network operations run concurrently and keep independent error
//! surfaces: a failed geocode lookup never suppresses the truck list, and
//! a failed dataset fetch never suppresses the location card. Neither is
//! retried; the user re-runs the command.

use sfft_core::{closest_trucks, AppConfig, RankedTruck, UserLocation, MAX_RESULTS};
use sfft_data::TruckDataClient;
use sfft_geocode::{resolve_user_location, GeocodeClient};

/// User-visible message for any location-resolution failure. Deliberately
/// generic: geocoding internals are never surfaced.
const LOCATION_ERROR: &str = "Failed to get location";

/// User-visible message for any dataset-fetch failure.
const DATA_ERROR: &str = "Failed to fetch food trucks";

pub(crate) async fn run_nearby(
    config: &AppConfig,
    lat: f64,
    lng: f64,
    json: bool,
    skip_geocode: bool,
) -> anyhow::Result<()> {
    let data_client = TruckDataClient::new(
        &config.data_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let (trucks_result, location_outcome) = tokio::join!(
        data_client.fetch_active_trucks(),
        locate(config, lat, lng, skip_geocode),
    );

    let (location, location_error) = location_outcome;

    let (trucks, data_error) = match trucks_result {
        Ok(trucks) => (trucks, None),
        Err(err) => {
            tracing::debug!(error = %err, "truck dataset fetch failed");
            (Vec::new(), Some(DATA_ERROR))
        }
    };

    let ranked = closest_trucks(Some(&location), &trucks);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print!("{}", render_report(&location, location_error, &ranked, data_error));
    }
    Ok(())
}

/// Resolves the reference point. The coordinates come straight from the
/// command line; the lookup only decorates them with display strings, so
/// any failure degrades to bare coordinates plus the generic error.
async fn locate(
    config: &AppConfig,
    lat: f64,
    lng: f64,
    skip_geocode: bool,
) -> (UserLocation, Option<&'static str>) {
    if skip_geocode {
        return (UserLocation::bare(lat, lng), None);
    }

    let Some(token) = config.mapbox_access_token.as_deref() else {
        tracing::warn!("MAPBOX_ACCESS_TOKEN not set; skipping reverse geocoding");
        return (UserLocation::bare(lat, lng), None);
    };

    let client = match GeocodeClient::new(token, config.request_timeout_secs, &config.user_agent) {
        Ok(client) => client,
        Err(err) => {
            tracing::debug!(error = %err, "geocode client construction failed");
            return (UserLocation::bare(lat, lng), Some(LOCATION_ERROR));
        }
    };

    match resolve_user_location(&client, lat, lng).await {
        Ok(location) => (location, None),
        Err(err) => {
            tracing::debug!(error = %err, "reverse geocoding failed");
            (UserLocation::bare(lat, lng), Some(LOCATION_ERROR))
        }
    }
}

/// Renders the location card followed by the truck list.
fn render_report(
    location: &UserLocation,
    location_error: Option<&str>,
    ranked: &[RankedTruck],
    data_error: Option<&str>,
) -> String {
    let mut out = String::new();

    out.push_str("Your Location\n");
    if let Some(message) = location_error {
        out.push_str(&format!("  {message}\n"));
    } else if let Some(address) = location.full_address.as_deref() {
        out.push_str(&format!("  {address}\n"));
    } else {
        out.push_str(&format!("  {:.4}, {:.4}\n", location.lat, location.lng));
    }
    out.push('\n');

    out.push_str(&format!(
        "Closest Food Trucks ({}/{MAX_RESULTS})\n",
        ranked.len()
    ));
    if let Some(message) = data_error {
        out.push_str(&format!("  {message}\n"));
    } else if ranked.is_empty() {
        out.push_str("  No food trucks found nearby\n");
    } else {
        for entry in ranked {
            out.push_str(&format!(
                "  {}  {:.1} mi\n",
                entry.truck.applicant, entry.distance
            ));
            if let Some(fooditems) = entry.truck.fooditems.as_deref() {
                out.push_str(&format!("    {fooditems}\n"));
            }
            if let Some(address) = entry.truck.address.as_deref() {
                out.push_str(&format!("    {address}\n"));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfft_core::types::FoodTruck;

    fn ranked(applicant: &str, distance: f64) -> RankedTruck {
        RankedTruck {
            truck: FoodTruck {
                objectid: "1".to_string(),
                applicant: applicant.to_string(),
                facilitytype: "Truck".to_string(),
                status: "APPROVED".to_string(),
                address: Some("2555 HARRISON ST".to_string()),
                fooditems: Some("Tacos: Burritos".to_string()),
                latitude: Some("37.7749".to_string()),
                longitude: Some("-122.4194".to_string()),
                location: None,
            },
            lat: 37.7749,
            lng: -122.4194,
            distance,
        }
    }

    fn located() -> UserLocation {
        UserLocation {
            lat: 37.7749,
            lng: -122.4194,
            city: Some("San Francisco".to_string()),
            full_address: Some("San Francisco, California, United States".to_string()),
        }
    }

    #[test]
    fn renders_address_count_and_one_decimal_distance() {
        let out = render_report(&located(), None, &[ranked("El Tonayense", 0.8712)], None);
        assert!(out.contains("San Francisco, California, United States"), "got: {out}");
        assert!(out.contains("Closest Food Trucks (1/5)"), "got: {out}");
        assert!(out.contains("El Tonayense  0.9 mi"), "got: {out}");
        assert!(out.contains("Tacos: Burritos"), "got: {out}");
        assert!(out.contains("2555 HARRISON ST"), "got: {out}");
    }

    #[test]
    fn renders_bare_coordinates_without_an_address() {
        let out = render_report(&UserLocation::bare(37.7749, -122.4194), None, &[], None);
        assert!(out.contains("37.7749, -122.4194"), "got: {out}");
    }

    #[test]
    fn location_error_replaces_the_address_but_not_the_list() {
        let out = render_report(
            &UserLocation::bare(37.7749, -122.4194),
            Some(LOCATION_ERROR),
            &[ranked("Senor Sisig", 1.2)],
            None,
        );
        assert!(out.contains("Failed to get location"), "got: {out}");
        assert!(out.contains("Senor Sisig  1.2 mi"), "got: {out}");
    }

    #[test]
    fn data_error_replaces_the_list_but_not_the_location() {
        let out = render_report(&located(), None, &[], Some(DATA_ERROR));
        assert!(out.contains("San Francisco"), "got: {out}");
        assert!(out.contains("Failed to fetch food trucks"), "got: {out}");
        assert!(!out.contains("No food trucks found nearby"), "got: {out}");
    }

    #[test]
    fn empty_result_without_error_shows_the_empty_state() {
        let out = render_report(&located(), None, &[], None);
        assert!(out.contains("Closest Food Trucks (0/5)"), "got: {out}");
        assert!(out.contains("No food trucks found nearby"), "got: {out}");
    }
}
