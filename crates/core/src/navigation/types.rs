//! Navigation type definitions
//!
//! This module contains core types exchanged with the driving loop:
//! - `Fix`: Position input for one tick
//! - `NavigationOutput`: What the display should show for one tick
//! - `NavigationConfig`: Construction-time tuning for the navigation core

use super::catalog::TargetName;
use super::direction::CompassOctant;
use super::geo::GeoPoint;
use super::heading::DEFAULT_DECLINATION_DEG;

/// Default arrival radius in meters
pub const DEFAULT_ARRIVAL_THRESHOLD_M: f64 = 20.0;

/// Position reading for one tick
///
/// Absence of a fix is an expected state, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Fix {
    /// Receiver has no position solution
    #[default]
    NoFix,
    /// Current position
    Have(GeoPoint),
}

impl Fix {
    /// Position, if the receiver has one
    pub fn position(&self) -> Option<GeoPoint> {
        match self {
            Fix::NoFix => None,
            Fix::Have(point) => Some(*point),
        }
    }

    /// True if a position is available
    pub fn has_fix(&self) -> bool {
        matches!(self, Fix::Have(_))
    }
}

impl From<Option<GeoPoint>> for Fix {
    fn from(value: Option<GeoPoint>) -> Self {
        match value {
            Some(point) => Fix::Have(point),
            None => Fix::NoFix,
        }
    }
}

/// Result of one navigation tick, handed to the rendering sink
///
/// Target names are passed through in full. Truncation to the display width
/// is the renderer's job.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationOutput {
    /// No position available yet
    AwaitingFix,
    /// Within the arrival threshold of the nearest target
    Arrived {
        /// Name of the target reached
        target_name: TargetName,
    },
    /// Heading toward the nearest target
    Navigating {
        /// Name of the nearest target
        target_name: TargetName,
        /// Great-circle distance to the target in meters
        distance_m: f64,
        /// Direction of the target relative to the device heading
        octant: CompassOctant,
    },
}

impl NavigationOutput {
    /// Target name for `Arrived` and `Navigating`
    pub fn target_name(&self) -> Option<&str> {
        match self {
            NavigationOutput::AwaitingFix => None,
            NavigationOutput::Arrived { target_name }
            | NavigationOutput::Navigating { target_name, .. } => Some(target_name.as_str()),
        }
    }

    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationOutput::AwaitingFix => "awaiting_fix",
            NavigationOutput::Arrived { .. } => "arrived",
            NavigationOutput::Navigating { .. } => "navigating",
        }
    }
}

/// Configuration for the navigation core
///
/// Supplied at construction and not changed at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
    /// Magnetic declination added to the sensed heading (degrees)
    pub declination_deg: f64,
    /// Arrival radius in meters (inclusive)
    pub threshold_m: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            declination_deg: DEFAULT_DECLINATION_DEG,
            threshold_m: DEFAULT_ARRIVAL_THRESHOLD_M,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_default_is_no_fix() {
        let fix = Fix::default();
        assert_eq!(fix, Fix::NoFix);
        assert!(!fix.has_fix());
        assert!(fix.position().is_none());
    }

    #[test]
    fn test_fix_from_option() {
        let point = GeoPoint::new(40.0, -105.0);
        assert_eq!(Fix::from(Some(point)), Fix::Have(point));
        assert_eq!(Fix::from(None), Fix::NoFix);
        assert_eq!(Fix::Have(point).position(), Some(point));
    }

    #[test]
    fn test_navigation_output_accessors() {
        let name = TargetName::try_from("Liquor Max").unwrap();

        let arrived = NavigationOutput::Arrived {
            target_name: name.clone(),
        };
        assert_eq!(arrived.target_name(), Some("Liquor Max"));
        assert_eq!(arrived.kind(), "arrived");

        let navigating = NavigationOutput::Navigating {
            target_name: name,
            distance_m: 120.0,
            octant: CompassOctant::SW,
        };
        assert_eq!(navigating.target_name(), Some("Liquor Max"));
        assert_eq!(navigating.kind(), "navigating");

        assert_eq!(NavigationOutput::AwaitingFix.target_name(), None);
        assert_eq!(NavigationOutput::AwaitingFix.kind(), "awaiting_fix");
    }

    #[test]
    fn test_navigation_config_default() {
        let config = NavigationConfig::default();
        assert!((config.declination_deg - 7.6).abs() < 1e-12);
        assert!((config.threshold_m - 20.0).abs() < 1e-12);
    }
}
