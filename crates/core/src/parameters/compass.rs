//! Compass Parameter Definitions
//!
//! # Parameters
//!
//! - `COMPASS_DEC` - Magnetic declination in degrees, east positive. Added to
//!   the heading sensed by the magnetometer to get a true-north heading.

use super::error::ParameterError;
use super::load_float;
use super::storage::{ParamValue, ParameterStore};
use crate::navigation::DEFAULT_DECLINATION_DEG;

const MIN_DECLINATION_DEG: f64 = -180.0;
const MAX_DECLINATION_DEG: f64 = 180.0;

/// Compass configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassParams {
    /// Magnetic declination in degrees
    pub declination_deg: f64,
}

impl Default for CompassParams {
    fn default() -> Self {
        Self {
            declination_deg: DEFAULT_DECLINATION_DEG,
        }
    }
}

impl CompassParams {
    /// Register compass parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("COMPASS_DEC", ParamValue::Float(DEFAULT_DECLINATION_DEG))
    }

    /// Load compass configuration from parameter store
    ///
    /// Missing entries fall back to defaults; out-of-range values are clamped.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            declination_deg: load_float(
                store,
                "COMPASS_DEC",
                DEFAULT_DECLINATION_DEG,
                MIN_DECLINATION_DEG,
                MAX_DECLINATION_DEG,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_defaults() {
        let params = CompassParams::default();
        assert!((params.declination_deg - 7.6).abs() < 1e-12);
    }

    #[test]
    fn test_register_defaults() {
        let mut store = ParameterStore::default();
        CompassParams::register_defaults(&mut store).unwrap();
        assert_eq!(store.get("COMPASS_DEC"), Some(&ParamValue::Float(7.6)));
    }

    #[test]
    fn test_from_store() {
        let mut store = ParameterStore::default();
        CompassParams::register_defaults(&mut store).unwrap();
        store.set("COMPASS_DEC", ParamValue::Float(-12.25)).unwrap();

        let params = CompassParams::from_store(&store);
        assert_eq!(params.declination_deg, -12.25);
    }

    #[test]
    fn test_from_store_clamps() {
        let mut store = ParameterStore::default();
        CompassParams::register_defaults(&mut store).unwrap();
        store.set("COMPASS_DEC", ParamValue::Float(400.0)).unwrap();

        let params = CompassParams::from_store(&store);
        assert_eq!(params.declination_deg, 180.0);
    }
}
