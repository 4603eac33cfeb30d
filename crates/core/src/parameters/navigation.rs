//! Navigation Parameter Definitions
//!
//! # Parameters
//!
//! - `WP_RADIUS` - Arrival radius in meters. A position at or inside this
//!   distance of the nearest target counts as arrived.
//! - `SCHED_LOOP_MS` - Period of the driving loop in milliseconds. The core
//!   never reads it; it is stored here so the loop and the core share one
//!   configuration source.

use super::error::ParameterError;
use super::storage::{ParamValue, ParameterStore};
use super::{load_float, load_int};
use crate::navigation::DEFAULT_ARRIVAL_THRESHOLD_M;

// --- Defaults ---

const DEFAULT_LOOP_PERIOD_MS: i32 = 100;

// --- Ranges ---

const MIN_WP_RADIUS: f64 = 0.0;
const MAX_WP_RADIUS: f64 = 1000.0;

const MIN_LOOP_PERIOD_MS: i32 = 10;
const MAX_LOOP_PERIOD_MS: i32 = 10_000;

/// Navigation parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationParams {
    /// Arrival radius in meters (inclusive)
    pub threshold_m: f64,
    /// Driving loop tick period in milliseconds
    pub loop_period_ms: u32,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            threshold_m: DEFAULT_ARRIVAL_THRESHOLD_M,
            loop_period_ms: DEFAULT_LOOP_PERIOD_MS as u32,
        }
    }
}

impl NavigationParams {
    /// Register navigation parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("WP_RADIUS", ParamValue::Float(DEFAULT_ARRIVAL_THRESHOLD_M))?;
        store.register("SCHED_LOOP_MS", ParamValue::Int(DEFAULT_LOOP_PERIOD_MS))?;
        Ok(())
    }

    /// Load navigation parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            threshold_m: load_float(
                store,
                "WP_RADIUS",
                DEFAULT_ARRIVAL_THRESHOLD_M,
                MIN_WP_RADIUS,
                MAX_WP_RADIUS,
            ),
            // Clamped to a positive range, so the cast cannot wrap
            loop_period_ms: load_int(
                store,
                "SCHED_LOOP_MS",
                DEFAULT_LOOP_PERIOD_MS,
                MIN_LOOP_PERIOD_MS,
                MAX_LOOP_PERIOD_MS,
            ) as u32,
        }
    }
}
