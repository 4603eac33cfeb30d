//! poi_compass_core - Pure no_std logic for the nearest-POI compass
//!
//! This crate contains the platform-agnostic navigation algorithms and types
//! that can be tested on host without any feature flags or hardware crates.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Sensors and display injected via traits
//!
//! # Modules
//!
//! - [`navigation`]: Geodesic math, target catalog, heading, octants, arrival state
//! - [`parameters`]: Named parameter store and navigation tuning groups
//! - [`traits`]: Position, magnetometer and render sink abstractions

#![no_std]

pub mod navigation;
pub mod parameters;
pub mod traits;
