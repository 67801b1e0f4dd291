use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::geometry::{light_angle, light_direction, light_position};
use crate::phase::MoonPhase;

#[test]
fn test_light_angle_endpoints() {
    assert_abs_diff_eq!(light_angle(MoonPhase::New), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(light_angle(MoonPhase::Full), PI, epsilon = 1e-6);
}

#[test]
fn test_light_angle_matches_cycle_position() {
    // The table is exactly 2π × cycle_fraction, in π/4 steps
    for phase in MoonPhase::ALL {
        assert_relative_eq!(
            light_angle(phase),
            TAU * phase.cycle_fraction(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_light_angle_monotonic_around_cycle() {
    for window in MoonPhase::ALL.windows(2) {
        assert!(
            light_angle(window[0]) < light_angle(window[1]),
            "light angle must advance from {} to {}",
            window[0],
            window[1]
        );
    }
}

#[test]
fn test_waning_crescent_light_angle_is_seven_quarters_pi() {
    // 7π/4, not the 3π/4 that would fold the waning crescent's light back
    // onto the waxing-gibbous position
    assert_relative_eq!(
        light_angle(MoonPhase::WaningCrescent),
        7.0 * PI / 4.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_light_angle_in_range() {
    for phase in MoonPhase::ALL {
        let angle = light_angle(phase);
        assert!((0.0..TAU).contains(&angle), "{} angle {} outside [0, 2π)", phase, angle);
    }
}

#[test]
fn test_light_direction_is_unit_length() {
    for phase in MoonPhase::ALL {
        let direction = light_direction(light_angle(phase));
        assert_relative_eq!(direction.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_light_direction_cardinal_phases() {
    // New: sun behind the camera-facing moon (+z)
    let new = light_direction(light_angle(MoonPhase::New));
    assert_abs_diff_eq!(new.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(new.z, 1.0, epsilon = 1e-9);

    // Full: sun behind the moon from the camera (-z)
    let full = light_direction(light_angle(MoonPhase::Full));
    assert_abs_diff_eq!(full.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(full.z, -1.0, epsilon = 1e-9);

    // First quarter: sun to the side (+x)
    let quarter = light_direction(light_angle(MoonPhase::FirstQuarter));
    assert_abs_diff_eq!(quarter.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(quarter.z, 0.0, epsilon = 1e-9);

    // The light stays in the horizontal plane
    for phase in MoonPhase::ALL {
        assert_eq!(light_direction(light_angle(phase)).y, 0.0);
    }
}

#[test]
fn test_light_position_scales_direction() {
    let distance = 2.0;
    let position = light_position(FRAC_PI_2, distance);
    assert_abs_diff_eq!(position.x, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(position.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(position.z, 0.0, epsilon = 1e-9);

    let origin_distance = position.coords.norm();
    assert_relative_eq!(origin_distance, distance, epsilon = 1e-12);
}
