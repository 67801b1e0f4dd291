//! Lunar phase classification and characterization
//!
//! This crate provides the domain model behind a "3D moon whose lighting
//! matches the real sky" frontend: the eight-member phase category, the
//! illumination fractions and percentages a presentation layer displays,
//! the simulated-sunlight angle and vectors a renderer consumes, and an
//! explicit view-state struct for the presenting UI.
//!
//! All phase computations are pure, synchronous, and total over the closed
//! enum domain. Anything involving dates lives in the `lunar-ephemeris` crate.

pub mod attributes;
pub mod geometry;
pub mod illumination;
pub mod phase;
pub mod viewer;

// Re-export key types at crate root
pub use attributes::PhaseAttributes;
pub use geometry::{light_angle, light_direction, light_position};
pub use illumination::{
    fraction_from_cycle, fraction_from_phase_angle, illuminated_fraction, illumination_percent,
    phase_angle_from_fraction, photometric_fraction_from_cycle,
};
pub use phase::MoonPhase;
pub use viewer::{FetchFailure, FetchStatus, ObserverLocation, PhaseReading, PhaseViewState};

#[cfg(test)]
mod geometry_test;
#[cfg(test)]
mod viewer_test;
