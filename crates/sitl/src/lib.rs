//! poi_compass_sitl - Host-side harness for the POI compass
//!
//! Stands in for the device's GPS receiver, magnetometer, display and main
//! loop so the navigation core can be exercised end to end on a workstation.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod runner;
pub mod walker;

pub use catalog::{catalog_from_args, default_catalog, parse_point, parse_target};
pub use config::{build_store, LoopSettings};
pub use display::{Frame, TextDisplay};
pub use error::SitlError;
pub use runner::{CompassLoop, LoopSummary, StopCondition};
pub use walker::{SimulatedWalker, WalkerConfig, WalkerHandle};
