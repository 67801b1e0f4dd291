//! Civil date to lunar phase
//!
//! A low-precision synodic calendar: a Gregorian calendar date becomes a
//! Julian day, the Julian day becomes a position within the mean lunation,
//! and that position becomes a named [`MoonPhase`] with its derived
//! attributes. Accuracy is ±1 day on the phase, which is what a
//! "what does the moon look like tonight" display needs.
//!
//! [`MoonPhase`]: lunar_phase::MoonPhase

pub mod julian;
pub mod synodic;

// Re-export key types at crate root
pub use julian::JulianDay;
pub use synodic::{
    LunationSnapshot, NEW_MOON_EPOCH, SYNODIC_MONTH_DAYS, age_in_days, cycle_fraction_at,
    phase_at, snapshot_at,
};

#[cfg(test)]
mod julian_test;
