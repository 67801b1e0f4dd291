//! Simulated-sunlight geometry for a rendering frontend
//!
//! The renderer draws a static moon sphere and moves a sun light around it;
//! the phase determines where the light sits. The light orbits in the
//! horizontal plane: angle 0 puts it directly behind the camera-facing moon
//! (+z, new moon, dark disk), angle π puts it behind the moon from the
//! camera's perspective (-z, full moon, fully lit disk).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use nalgebra::{Point3, Vector3};

use crate::phase::MoonPhase;

/// Light angle (radians) for a named phase
///
/// Phases are spaced at π/4 increments around the cycle, 0 for New and π
/// for Full; the table is exactly `2π × cycle_fraction`. WaningCrescent
/// maps to 7π/4, keeping the angle monotonic around the circle.
///
/// Angle convention: 0 = new. This is the inverse of the photometric
/// [`phase_angle_from_fraction`] convention (0 = full); the two angles
/// measure different geometry.
///
/// [`phase_angle_from_fraction`]: crate::illumination::phase_angle_from_fraction
pub fn light_angle(phase: MoonPhase) -> f64 {
    match phase {
        MoonPhase::New => 0.0,
        MoonPhase::WaxingCrescent => FRAC_PI_4,
        MoonPhase::FirstQuarter => FRAC_PI_2,
        MoonPhase::WaxingGibbous => 3.0 * FRAC_PI_4,
        MoonPhase::Full => PI,
        MoonPhase::WaningGibbous => 5.0 * FRAC_PI_4,
        MoonPhase::LastQuarter => 3.0 * FRAC_PI_2,
        MoonPhase::WaningCrescent => 7.0 * FRAC_PI_4,
    }
}

/// Unit direction from the moon toward the light source
///
/// The light orbits in the y = 0 plane: `(sin θ, 0, cos θ)`. New (θ = 0)
/// points along +z, Full along -z, FirstQuarter along +x.
pub fn light_direction(angle: f64) -> Vector3<f64> {
    Vector3::new(angle.sin(), 0.0, angle.cos())
}

/// Position for a light entity at the given distance from the moon
///
/// The renderer places its directional sun here and aims it back at the
/// origin, where the moon sits.
pub fn light_position(angle: f64, distance: f64) -> Point3<f64> {
    Point3::new(distance * angle.sin(), 0.0, distance * angle.cos())
}
