//! Geographic calculations for navigation
//!
//! Spherical-earth great-circle math used by the navigation core. All
//! functions are pure and take coordinates in decimal degrees.
//!
//! # Preconditions
//!
//! Inputs are expected to be finite, in-range degrees. Nothing here
//! validates them: NaN or infinite inputs propagate as NaN results.

use libm::{atan2, cos, sin, sqrt};

/// Mean earth radius used by the haversine formula (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// A latitude/longitude pair in decimal degrees (WGS-84 assumed)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to +180)
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point from latitude and longitude in degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(*self, *other)
    }

    /// Initial bearing from this point toward `other` in degrees
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        initial_bearing(*self, *other)
    }
}

/// Great-circle distance between two points in meters (haversine)
///
/// Symmetric, never negative, and exactly zero for identical points.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude * DEG_TO_RAD;
    let lat2_rad = b.latitude * DEG_TO_RAD;
    let delta_lat = (b.latitude - a.latitude) * DEG_TO_RAD;
    let delta_lon = (b.longitude - a.longitude) * DEG_TO_RAD;

    let sin_dlat = sin(delta_lat / 2.0);
    let sin_dlon = sin(delta_lon / 2.0);
    let h = sin_dlat * sin_dlat + cos(lat1_rad) * cos(lat2_rad) * sin_dlon * sin_dlon;
    let c = 2.0 * atan2(sqrt(h), sqrt(1.0 - h));

    EARTH_RADIUS_M * c
}

/// Initial bearing (forward azimuth) from `from` toward `to`
///
/// Returns degrees in [0, 360), 0 = true north, clockwise.
///
/// The result carries no meaning when `from == to`; callers must only ask
/// for a bearing between distinct points.
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.latitude * DEG_TO_RAD;
    let lat2_rad = to.latitude * DEG_TO_RAD;
    let delta_lon = (to.longitude - from.longitude) * DEG_TO_RAD;

    let y = sin(delta_lon) * cos(lat2_rad);
    let x = cos(lat1_rad) * sin(lat2_rad) - sin(lat1_rad) * cos(lat2_rad) * cos(delta_lon);
    let bearing = atan2(y, x) * RAD_TO_DEG;

    normalize_degrees(bearing)
}

/// Fold any finite angle into [0, 360)
///
/// Computes `((x % 360) + 360) % 360`, so negative and multi-turn inputs land
/// on the same value as their principal angle.
pub fn normalize_degrees(x: f64) -> f64 {
    ((x % 360.0) + 360.0) % 360.0
}

/// Convert radians to degrees
pub(crate) fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}
