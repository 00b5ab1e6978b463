//! Domain types for the food-truck ranking pipeline.

use serde::{Deserialize, Serialize};

/// A raw truck entry as served by the mobile-food-facility dataset.
///
/// Coordinates arrive as strings and may appear either as top-level
/// `latitude`/`longitude` fields or inside a nested `location` object;
/// either, both or neither may be present and neither is guaranteed to
/// parse. Validation happens in [`crate::ranking`], not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodTruck {
    /// Source-assigned identifier. The dataset does not actually guarantee
    /// uniqueness; the ranking pipeline deduplicates on it.
    pub objectid: String,
    /// Display name of the permit applicant (the truck's public name).
    pub applicant: String,
    pub facilitytype: String,
    pub status: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub fooditems: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub location: Option<NestedLocation>,
}

/// The nested coordinate sub-object some dataset records carry instead of
/// (or in addition to) the top-level fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedLocation {
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// A truck whose coordinates validated, with its distance from the
/// reference point attached. Produced by [`crate::ranking::closest_trucks`]
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTruck {
    #[serde(flatten)]
    pub truck: FoodTruck,
    /// Validated latitude in decimal degrees.
    pub lat: f64,
    /// Validated longitude in decimal degrees.
    pub lng: f64,
    /// Great-circle distance from the reference point, in miles.
    pub distance: f64,
}

/// The user's current position, used as the distance origin.
///
/// `city` and `full_address` come from reverse geocoding and are for
/// display only; the ranking pipeline reads just `lat`/`lng`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLocation {
    pub lat: f64,
    pub lng: f64,
    pub city: Option<String>,
    pub full_address: Option<String>,
}

impl UserLocation {
    /// A reference point with coordinates only, no resolved address.
    #[must_use]
    pub fn bare(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            city: None,
            full_address: None,
        }
    }
}
