//! Compass heading from magnetometer readings
//!
//! The heading is taken from the two horizontal field components only. The
//! vertical (z) component is carried in [`MagneticField`] because the sensor
//! reports it, but it is never folded into the result: there is no tilt
//! compensation and the device is assumed to be held level.

use libm::atan2;

use super::geo::{normalize_degrees, rad_to_deg};

/// Default magnetic declination in degrees (east positive)
pub const DEFAULT_DECLINATION_DEG: f64 = 7.6;

/// One raw magnetometer sample
///
/// Units are whatever the sensor reports; only the ratio `y / x` matters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagneticField {
    /// Field along the device X axis
    pub x: f64,
    /// Field along the device Y axis
    pub y: f64,
    /// Field along the device Z axis (unused for heading)
    pub z: f64,
}

impl MagneticField {
    /// Create a new field sample
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Heading in degrees [0, 360) with declination applied
    pub fn heading(&self, declination_deg: f64) -> f64 {
        compute_heading(self.x, self.y, declination_deg)
    }
}

/// Compute compass heading from horizontal field components
///
/// `heading = normalize(degrees(atan2(mag_y, mag_x)) + declination_deg)`
pub fn compute_heading(mag_x: f64, mag_y: f64, declination_deg: f64) -> f64 {
    normalize_degrees(rad_to_deg(atan2(mag_y, mag_x)) + declination_deg)
}
