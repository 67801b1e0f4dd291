//! Illumination fractions, display percentages, and the photometric phase angle
//!
//! Two related quantities live here and are easy to conflate:
//!
//! - **Cycle fraction**: position within one lunation, 0 at new, 0.5 at full,
//!   wrapping at 1 (see [`MoonPhase::cycle_fraction`]).
//! - **Illuminated fraction**: how much of the visible disk is lit, 0 at new,
//!   1 at full, symmetric around full.
//!
//! The display conversion between them is piecewise linear; the photometric
//! conversion is cosine-based. Both are provided.

use crate::phase::MoonPhase;

/// Illuminated fraction of the disk for a named phase
///
/// Symmetric around Full: the waxing and waning crescent, quarter, and
/// gibbous phases each share a value. Derived from the phase's cycle
/// position via [`fraction_from_cycle`].
///
/// # Examples
///
/// ```rust
/// use lunar_phase::{illuminated_fraction, MoonPhase};
///
/// assert_eq!(illuminated_fraction(MoonPhase::New), 0.0);
/// assert_eq!(illuminated_fraction(MoonPhase::FirstQuarter), 0.5);
/// assert_eq!(illuminated_fraction(MoonPhase::Full), 1.0);
/// assert_eq!(illuminated_fraction(MoonPhase::LastQuarter), 0.5);
/// ```
pub fn illuminated_fraction(phase: MoonPhase) -> f64 {
    fraction_from_cycle(phase.cycle_fraction())
}

/// Illuminated fraction from a continuous cycle position (piecewise linear)
///
/// Maps 0 → 0 (new), 0.5 → 1 (full), 1 → 0 (new again): `2c` on the waxing
/// half, `2 - 2c` on the waning half. The input is wrapped into [0, 1) first.
///
/// This is the display conversion; for the photometrically correct smooth
/// curve see [`photometric_fraction_from_cycle`].
pub fn fraction_from_cycle(cycle_fraction: f64) -> f64 {
    let c = cycle_fraction.rem_euclid(1.0);
    if c <= 0.5 { 2.0 * c } else { 2.0 - 2.0 * c }
}

/// Illuminated fraction from a continuous cycle position (photometric)
///
/// `(1 - cos 2πc) / 2`: the smooth cosine curve the piecewise-linear display
/// value approximates. Agrees with [`fraction_from_cycle`] exactly at new,
/// the quarters, and full.
pub fn photometric_fraction_from_cycle(cycle_fraction: f64) -> f64 {
    let c = cycle_fraction.rem_euclid(1.0);
    (1.0 - (std::f64::consts::TAU * c).cos()) / 2.0
}

/// Illumination as a 0-100 percentage for display, rounded to the nearest integer
pub fn illumination_percent(phase: MoonPhase) -> u8 {
    percent_from_fraction(illuminated_fraction(phase))
}

/// Round an illuminated fraction to a whole display percentage
pub fn percent_from_fraction(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Photometric phase angle (radians) from an illuminated fraction
///
/// `α = acos(2k - 1)` with `k` clamped to [0, 1] so the inverse cosine
/// stays in its domain.
///
/// Angle convention: this is the standard Sun-Moon-observer phase angle,
/// where **α = 0 means full and α = π means new** - the inverse of the
/// render-facing [`light_angle`] convention (0 = new). The two angles
/// measure different geometry and are deliberately not reconciled.
///
/// [`light_angle`]: crate::geometry::light_angle
///
/// # Examples
///
/// ```rust
/// use std::f64::consts::PI;
/// use lunar_phase::phase_angle_from_fraction;
///
/// assert_eq!(phase_angle_from_fraction(0.0), PI);
/// assert_eq!(phase_angle_from_fraction(1.0), 0.0);
/// ```
pub fn phase_angle_from_fraction(illuminated: f64) -> f64 {
    let k = illuminated.clamp(0.0, 1.0);
    (2.0 * k - 1.0).acos()
}

/// Illuminated fraction from a photometric phase angle (radians)
///
/// `k = (1 + cos α) / 2`, the exact inverse of [`phase_angle_from_fraction`].
pub fn fraction_from_phase_angle(phase_angle: f64) -> f64 {
    (1.0 + phase_angle.cos()) / 2.0
}
