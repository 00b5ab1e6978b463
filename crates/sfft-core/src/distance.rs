//! Great-circle distance via the haversine formula.

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle surface distance between two points, in miles.
///
/// Inputs are decimal degrees; southern/western hemispheres are just
/// negative values, no special-casing. Identical inputs yield exactly 0
/// and the function is symmetric in its two points.
#[must_use]
pub fn distance_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lng / 2.0).sin().powi(2);

    EARTH_RADIUS_MILES * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
