use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// The J2000.0 epoch: 2000 January 1, 12:00 UT
pub const J2000: JulianDay = JulianDay(2_451_545.0);

/// A Julian day number using f64 precision.
///
/// The `JulianDay` struct counts days (with fraction) since the Julian
/// epoch, the timescale all the synodic arithmetic in this crate runs on.
/// Serialized as a bare number.
///
/// # Examples
///
/// ```rust
/// use lunar_ephemeris::JulianDay;
///
/// // Noon UT on 2000 January 1 is the J2000.0 epoch
/// let jd = JulianDay::from_calendar(2000, 1, 1, 12, 0, 0.0);
/// assert_eq!(jd.value(), 2_451_545.0);
///
/// // Days are the natural arithmetic unit
/// let tomorrow = jd + 1.0;
/// assert_eq!(tomorrow - jd, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct JulianDay(f64); // Base unit: days since the Julian epoch

impl JulianDay {
    /// Creates a `JulianDay` from a raw day count.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Creates a `JulianDay` from a Gregorian calendar date and UT time of day.
    ///
    /// Standard astronomical conversion (Meeus): month and year are shifted
    /// so the leap day falls at the end of the counting year, then the
    /// Gregorian century correction is applied. Valid for the Gregorian
    /// calendar proper, i.e. dates from 1583 onward.
    ///
    /// `month` is 1 = January through 12 = December; `second` may carry a
    /// fraction.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let mut y = year;
        let mut m = month as i32;
        if m <= 2 {
            y -= 1;
            m += 12;
        }

        let a = (y as f64 / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let jd0 = (365.25 * (y as f64 + 4716.0)).floor()
            + (30.6001 * ((m + 1) as f64)).floor()
            + day as f64
            + b
            - 1524.5;

        let day_fraction = (hour as f64 + (minute as f64 + second / 60.0) / 60.0) / 24.0;

        Self(jd0 + day_fraction)
    }

    /// Returns the raw day count.
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Offsetting a Julian day by a number of days
impl Add<f64> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: f64) -> JulianDay {
        JulianDay(self.0 + days)
    }
}

impl Sub<f64> for JulianDay {
    type Output = JulianDay;

    fn sub(self, days: f64) -> JulianDay {
        JulianDay(self.0 - days)
    }
}

/// Difference of two Julian days is a span in days
impl Sub for JulianDay {
    type Output = f64;

    fn sub(self, rhs: JulianDay) -> f64 {
        self.0 - rhs.0
    }
}
