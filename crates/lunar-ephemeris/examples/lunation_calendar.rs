//! Print one synodic month of daily phase snapshots as CSV
//!
//! Usage: cargo run -p lunar-ephemeris --example lunation_calendar
//!
//! Output: one row per day starting at the 2024-01-11 new moon

use lunar_ephemeris::{JulianDay, snapshot_at};

fn main() {
    let start = JulianDay::from_calendar(2024, 1, 11, 12, 0, 0.0);
    let n_days = 30;

    // CSV header
    println!("day,julian_day,phase,age_days,cycle_fraction,illum_pct,light_angle_rad");

    for day in 0..n_days {
        let snapshot = snapshot_at(start + day as f64);

        println!(
            "{},{:.2},{},{:.2},{:.4},{},{:.4}",
            day,
            snapshot.julian_day.value(),
            snapshot.display_name,
            snapshot.age_days,
            snapshot.cycle_fraction,
            snapshot.illumination_percent,
            snapshot.light_angle_radians,
        );
    }

    eprintln!("Printed {} days of lunation snapshots", n_days);
}
