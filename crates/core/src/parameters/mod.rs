//! Configuration parameters
//!
//! Named, typed configuration values with registered defaults. Parameter
//! groups register their entries into a [`ParameterStore`] and load typed
//! structs back out of it. Values live in memory only; nothing is persisted
//! across power cycles.
//!
//! # Parameters
//!
//! - `COMPASS_DEC` - Magnetic declination in degrees
//! - `WP_RADIUS` - Arrival radius in meters
//! - `SCHED_LOOP_MS` - Driving loop tick period in milliseconds

pub mod compass;
pub mod error;
pub mod navigation;
pub mod storage;

pub use compass::CompassParams;
pub use error::ParameterError;
pub use navigation::NavigationParams;
pub use storage::{ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};

use crate::navigation::NavigationConfig;

/// Register every parameter group with its defaults
pub fn register_all(store: &mut ParameterStore) -> Result<(), ParameterError> {
    CompassParams::register_defaults(store)?;
    NavigationParams::register_defaults(store)?;
    log::debug!("{} parameters registered", store.len());
    Ok(())
}

/// Build the navigation core configuration from the store
pub fn load_navigation_config(store: &ParameterStore) -> NavigationConfig {
    if store.is_empty() {
        log::warn!("Parameter store is empty, using defaults");
    }
    let compass = CompassParams::from_store(store);
    let navigation = NavigationParams::from_store(store);
    NavigationConfig {
        declination_deg: compass.declination_deg,
        threshold_m: navigation.threshold_m,
    }
}

/// Load a float parameter from store with clamping
pub(crate) fn load_float(
    store: &ParameterStore,
    name: &str,
    default: f64,
    min: f64,
    max: f64,
) -> f64 {
    let raw = match store.get(name) {
        Some(ParamValue::Float(v)) => *v,
        Some(ParamValue::Int(v)) => *v as f64,
        _ => return default,
    };
    if raw.is_nan() {
        log::warn!("{} is NaN, using default {}", name, default);
        return default;
    }
    let clamped = raw.clamp(min, max);
    if clamped != raw {
        log::warn!("{} = {} out of range, clamped to {}", name, raw, clamped);
    }
    clamped
}

/// Load an integer parameter from store with clamping
pub(crate) fn load_int(store: &ParameterStore, name: &str, default: i32, min: i32, max: i32) -> i32 {
    let raw = match store.get(name) {
        Some(ParamValue::Int(v)) => *v,
        _ => return default,
    };
    let clamped = raw.clamp(min, max);
    if clamped != raw {
        log::warn!("{} = {} out of range, clamped to {}", name, raw, clamped);
    }
    clamped
}
