//! Parameter store setup for the simulated compass.
//!
//! All tuning goes through the core [`ParameterStore`]: defaults are
//! registered first, command-line overrides are applied on top, and the
//! typed settings are loaded back out with range clamping.

use std::time::Duration;

use poi_compass_core::navigation::NavigationConfig;
use poi_compass_core::parameters::{
    load_navigation_config, register_all, NavigationParams, ParamValue, ParameterStore,
};

use crate::error::SitlError;

/// Settings for one run of the driving loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// Configuration handed to the navigator.
    pub navigation: NavigationConfig,
    /// Driving loop tick period.
    pub tick_period: Duration,
}

impl LoopSettings {
    /// Load settings from a populated store.
    pub fn from_store(store: &ParameterStore) -> Self {
        let navigation = load_navigation_config(store);
        let params = NavigationParams::from_store(store);
        Self {
            navigation,
            tick_period: Duration::from_millis(u64::from(params.loop_period_ms)),
        }
    }
}

/// Build a store with every parameter registered, then apply `overrides`.
pub fn build_store(overrides: &[(&str, ParamValue)]) -> Result<ParameterStore, SitlError> {
    let mut store = ParameterStore::new();
    register_all(&mut store)?;

    for (name, value) in overrides {
        store.set(name, *value)?;
        log::debug!("{} = {:?}", name, value);
    }

    Ok(store)
}
