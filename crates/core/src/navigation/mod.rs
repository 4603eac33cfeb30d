//! Navigation core
//!
//! Geodesic math, nearest-target search, heading from the magnetometer,
//! octant quantization and the per-tick arrival decision.

pub mod catalog;
pub mod controller;
pub mod direction;
pub mod error;
pub mod geo;
pub mod heading;
mod types;

pub use catalog::{Target, TargetCatalog, TargetName, MAX_TARGETS, TARGET_NAME_LEN};
pub use controller::{NavigationStateMachine, Navigator};
pub use direction::{quantize, CompassOctant};
pub use error::ConfigurationError;
pub use geo::{distance, initial_bearing, normalize_degrees, GeoPoint, EARTH_RADIUS_M};
pub use heading::{compute_heading, MagneticField, DEFAULT_DECLINATION_DEG};
pub use types::{Fix, NavigationConfig, NavigationOutput, DEFAULT_ARRIVAL_THRESHOLD_M};
