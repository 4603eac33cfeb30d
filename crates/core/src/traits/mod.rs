//! Collaborator traits for the driving loop
//!
//! The navigation core never touches hardware. The driving loop owns one
//! implementation of each trait, injected at construction, and moves data
//! between them and the core once per tick.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Hardware and simulator implementations live outside this crate

pub mod display;
pub mod sensors;

pub use display::{MockRenderSink, RenderSink};
pub use sensors::{Magnetometer, MockMagnetometer, MockPositionProvider, PositionProvider};
