//! Eligibility filter applied between the raw fetch and the ranking
//! pipeline.

use sfft_core::FoodTruck;

/// Keeps records whose permit is approved, whose facility type is `Truck`,
/// and which carry coordinate data by at least one representation.
///
/// This is a cheap presence check only; full numeric validation (and the
/// nested-field fallback) happens inside the ranking pipeline. A record
/// that passes here can still be dropped there.
#[must_use]
pub fn filter_active(trucks: Vec<FoodTruck>) -> Vec<FoodTruck> {
    trucks
        .into_iter()
        .filter(|t| {
            let nested_lat = t.location.as_ref().and_then(|l| l.latitude.as_deref());
            let nested_lng = t.location.as_ref().and_then(|l| l.longitude.as_deref());
            t.status == "APPROVED"
                && t.facilitytype == "Truck"
                && has_coordinate_source(t.latitude.as_deref(), nested_lat)
                && has_coordinate_source(t.longitude.as_deref(), nested_lng)
        })
        .collect()
}

fn has_coordinate_source(top: Option<&str>, nested: Option<&str>) -> bool {
    let present = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
    present(top) || present(nested)
}
