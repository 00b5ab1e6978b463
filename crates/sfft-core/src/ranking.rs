//! The ranking pipeline: raw truck records in, the five nearest out.
//!
//! A pure, deterministic function over its two inputs — it never fails and
//! never touches I/O. Records with unresolvable coordinates are an expected
//! feature of the upstream open-data feed and are dropped silently; the
//! caller recomputes from scratch whenever either input changes.

use std::collections::HashSet;

use crate::coords::parse_coordinate;
use crate::distance::distance_miles;
use crate::types::{FoodTruck, RankedTruck, UserLocation};

/// Hard cap on the result set size.
pub const MAX_RESULTS: usize = 5;

/// Resolves a truck's coordinate pair, preferring the top-level fields and
/// falling back to the nested `location` object per axis independently.
///
/// Returns `None` when either axis cannot be resolved by any
/// representation — such records are ineligible for ranking.
fn resolve_coordinates(truck: &FoodTruck) -> Option<(f64, f64)> {
    let nested = truck.location.as_ref();
    let lat = parse_coordinate(truck.latitude.as_deref())
        .or_else(|| parse_coordinate(nested.and_then(|l| l.latitude.as_deref())))?;
    let lng = parse_coordinate(truck.longitude.as_deref())
        .or_else(|| parse_coordinate(nested.and_then(|l| l.longitude.as_deref())))?;
    Some((lat, lng))
}

/// Position identity key: both axes rounded to 6 decimal places
/// (sub-meter), so distinct source records describing the same physical
/// spot collapse into one.
///
/// Rounding happens before the zero check: a value like `-0.00000004`
/// rounds to negative zero at 6 decimals, and `{:.6}` would keep its sign.
/// Normalising the rounded value means `-0.0000001` and `0.0` are the same
/// place and never produce differently-signed keys.
fn coordinate_key(lat: f64, lng: f64) -> String {
    let normalise = |v: f64| {
        let rounded = (v * 1e6).round() / 1e6;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    };
    format!("{:.6},{:.6}", normalise(lat), normalise(lng))
}

/// Ranks `trucks` by distance from `reference` and returns at most
/// [`MAX_RESULTS`] entries, closest first.
///
/// Steps: resolve + validate coordinates (silently dropping failures),
/// attach haversine distance, stable-sort ascending (ties keep source
/// order), then a single dedup pass over two identity sets — source
/// `objectid` and rounded position — keeping the first occurrence of
/// each. No reference point or no candidates means an empty result.
#[must_use]
pub fn closest_trucks(reference: Option<&UserLocation>, trucks: &[FoodTruck]) -> Vec<RankedTruck> {
    let Some(reference) = reference else {
        return Vec::new();
    };
    if trucks.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<RankedTruck> = trucks
        .iter()
        .filter_map(|truck| {
            let (lat, lng) = resolve_coordinates(truck)?;
            let distance = distance_miles(reference.lat, reference.lng, lat, lng);
            Some(RankedTruck {
                truck: truck.clone(),
                lat,
                lng,
                distance,
            })
        })
        .collect();

    // Stable sort: equal distances keep the order records arrived in.
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_positions: HashSet<String> = HashSet::new();
    ranked.retain(|entry| {
        let position = coordinate_key(entry.lat, entry.lng);
        if seen_ids.contains(&entry.truck.objectid) || seen_positions.contains(&position) {
            return false;
        }
        seen_ids.insert(entry.truck.objectid.clone());
        seen_positions.insert(position);
        true
    });

    ranked.truncate(MAX_RESULTS);
    ranked
}
