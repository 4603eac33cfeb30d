//! Per-tick navigation decision
//!
//! [`NavigationStateMachine::step`] turns one tick's position and magnetometer
//! inputs into a [`NavigationOutput`]. Every tick is evaluated from scratch:
//! there is no latching, debounce or hysteresis, so a position hovering at the
//! arrival radius can alternate between `Arrived` and `Navigating` on
//! consecutive ticks.

use super::catalog::TargetCatalog;
use super::direction::quantize;
use super::geo::{initial_bearing, normalize_degrees};
use super::heading::{compute_heading, MagneticField};
use super::types::{Fix, NavigationConfig, NavigationOutput};

/// Arrival/navigating decision with one observational flag
///
/// `arrived` mirrors the last computed status for collaborators that want it.
/// It never feeds back into [`NavigationStateMachine::step`].
#[derive(Debug, Default)]
pub struct NavigationStateMachine {
    arrived: bool,
}

impl NavigationStateMachine {
    /// Create a state machine with `arrived = false`
    pub fn new() -> Self {
        Self { arrived: false }
    }

    /// Last known arrival status
    ///
    /// Unchanged by ticks without a fix.
    pub fn is_arrived(&self) -> bool {
        self.arrived
    }

    /// Compute the display output for one tick
    ///
    /// # Arguments
    /// * `fix` - Position for this tick, or `NoFix`
    /// * `mag_x`, `mag_y` - Horizontal magnetometer components
    /// * `declination_deg` - Declination added to the sensed heading
    /// * `threshold_m` - Inclusive arrival radius
    /// * `catalog` - Targets to navigate to
    pub fn step(
        &mut self,
        fix: Fix,
        mag_x: f64,
        mag_y: f64,
        declination_deg: f64,
        threshold_m: f64,
        catalog: &TargetCatalog,
    ) -> NavigationOutput {
        let position = match fix {
            Fix::NoFix => {
                log::trace!("tick: no fix");
                return NavigationOutput::AwaitingFix;
            }
            Fix::Have(position) => position,
        };

        let heading = compute_heading(mag_x, mag_y, declination_deg);
        let (target, distance_m) = catalog.nearest(position);

        if distance_m <= threshold_m {
            if !self.arrived {
                log::info!("Arrived at {} ({:.1} m)", target.name(), distance_m);
            }
            self.arrived = true;
            return NavigationOutput::Arrived {
                target_name: target.name_buf().clone(),
            };
        }

        // distance > threshold >= 0, so position and target differ here
        let bearing = initial_bearing(position, target.location());
        let delta = normalize_degrees(bearing - heading);
        let octant = quantize(delta);

        if self.arrived {
            log::info!("Left {} ({:.1} m)", target.name(), distance_m);
        }
        self.arrived = false;

        log::trace!(
            "tick: target={} dist={:.1} bearing={:.1} heading={:.1} octant={}",
            target.name(),
            distance_m,
            bearing,
            heading,
            octant
        );

        NavigationOutput::Navigating {
            target_name: target.name_buf().clone(),
            distance_m,
            octant,
        }
    }
}

/// Owns the catalog, configuration and state machine for a driving loop
#[derive(Debug)]
pub struct Navigator {
    catalog: TargetCatalog,
    config: NavigationConfig,
    state: NavigationStateMachine,
}

impl Navigator {
    /// Create a navigator for `catalog` with fixed configuration
    pub fn new(catalog: TargetCatalog, config: NavigationConfig) -> Self {
        Self {
            catalog,
            config,
            state: NavigationStateMachine::new(),
        }
    }

    /// Run one tick with the owned configuration
    pub fn update(&mut self, fix: Fix, field: MagneticField) -> NavigationOutput {
        self.state.step(
            fix,
            field.x,
            field.y,
            self.config.declination_deg,
            self.config.threshold_m,
            &self.catalog,
        )
    }

    /// Last known arrival status
    pub fn is_arrived(&self) -> bool {
        self.state.is_arrived()
    }

    /// Target catalog
    pub fn catalog(&self) -> &TargetCatalog {
        &self.catalog
    }

    /// Configuration in use
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }
}
