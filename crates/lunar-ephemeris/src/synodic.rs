//! Mean-lunation arithmetic
//!
//! The phase for a date comes from pure mean-cycle bookkeeping (Schaefer's
//! low-precision method): count synodic months since a reference new moon,
//! keep the fractional part, and bucket it into the nearest named phase.
//! No perturbation terms, so the phase can be off by up to a day near the
//! bucket edges.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use lunar_phase::{
    MoonPhase, illuminated_fraction, illumination_percent, light_angle,
    photometric_fraction_from_cycle,
};

use crate::julian::JulianDay;

/// Mean synodic month in days (new moon to new moon)
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Reference mean new moon: 2000 January 6 (JD 2451550.1)
pub const NEW_MOON_EPOCH: JulianDay = JulianDay::new(2_451_550.1);

/// Position within the lunation at a given instant, in [0, 1)
///
/// 0 is new moon, 0.5 is full. Total for any finite Julian day: dates
/// before the epoch wrap through `rem_euclid` onto the cycle position
/// they occupied.
pub fn cycle_fraction_at(jd: JulianDay) -> f64 {
    ((jd - NEW_MOON_EPOCH) / SYNODIC_MONTH_DAYS).rem_euclid(1.0)
}

/// Age of the moon in days since the last mean new moon, in [0, synodic month)
pub fn age_in_days(jd: JulianDay) -> f64 {
    cycle_fraction_at(jd) * SYNODIC_MONTH_DAYS
}

/// The named phase at a given instant (nearest eighth of the cycle, ±1 day)
pub fn phase_at(jd: JulianDay) -> MoonPhase {
    MoonPhase::from_cycle_fraction(cycle_fraction_at(jd))
}

/// Everything a frontend displays for one date query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct LunationSnapshot {
    /// The instant the snapshot was taken for
    pub julian_day: JulianDay,

    /// Nearest named phase
    pub phase: MoonPhase,

    /// Human-readable phase name
    pub display_name: String,

    /// Days since the last mean new moon
    pub age_days: f64,

    /// Position within the lunation, 0 = new, 0.5 = full
    pub cycle_fraction: f64,

    /// Discrete illuminated fraction of the named phase
    pub illuminated_fraction: f64,

    /// Smooth cosine illuminated fraction at the exact cycle position
    pub photometric_fraction: f64,

    /// Rounded 0-100 percentage for display (from the discrete fraction)
    pub illumination_percent: u8,

    /// Simulated-sunlight angle for the renderer, radians
    pub light_angle_radians: f64,
}

/// Compute the full snapshot for an instant
pub fn snapshot_at(jd: JulianDay) -> LunationSnapshot {
    let cycle_fraction = cycle_fraction_at(jd);
    let phase = MoonPhase::from_cycle_fraction(cycle_fraction);

    LunationSnapshot {
        julian_day: jd,
        phase,
        display_name: phase.name().to_string(),
        age_days: cycle_fraction * SYNODIC_MONTH_DAYS,
        cycle_fraction,
        illuminated_fraction: illuminated_fraction(phase),
        photometric_fraction: photometric_fraction_from_cycle(cycle_fraction),
        illumination_percent: illumination_percent(phase),
        light_angle_radians: light_angle(phase),
    }
}
