//! The eight-member lunar phase category
//!
//! MoonPhase is a closed enumeration over the named phases of one lunation,
//! in cycle order. Everything else in this crate (names, illumination,
//! light angles) is derived from it on demand.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Number of named phases in one lunar cycle
pub const PHASES_PER_CYCLE: usize = 8;

/// A named phase of the lunar cycle
///
/// Variants are declared in cycle order, so that each phase's position in
/// the lunation is its declaration index. The order is cyclic:
/// `WaningCrescent` is followed by `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum MoonPhase {
    /// Fully dark disk, start of the cycle
    New,

    /// Growing sliver between new and first quarter
    WaxingCrescent,

    /// Right half lit (northern hemisphere view)
    FirstQuarter,

    /// More than half lit, still growing
    WaxingGibbous,

    /// Fully lit disk, midpoint of the cycle
    Full,

    /// More than half lit, shrinking
    WaningGibbous,

    /// Left half lit (northern hemisphere view)
    LastQuarter,

    /// Shrinking sliver between last quarter and new
    WaningCrescent,
}

impl MoonPhase {
    /// All eight phases in cycle order
    pub const ALL: [MoonPhase; PHASES_PER_CYCLE] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Human-readable display name (e.g. "Waxing Gibbous")
    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Position in the cycle, 0 (New) through 7 (WaningCrescent)
    pub fn index(&self) -> usize {
        match self {
            Self::New => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::Full => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// Position within one lunation as a fraction: 0.0 at New, 0.5 at Full
    pub fn cycle_fraction(&self) -> f64 {
        self.index() as f64 / PHASES_PER_CYCLE as f64
    }

    /// Classify a cycle position into the nearest named phase
    ///
    /// The input is wrapped into [0, 1) first, so any finite fraction is
    /// accepted: negative values and values past one full cycle land on
    /// the phase they would reach after unwinding whole lunations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lunar_phase::MoonPhase;
    ///
    /// assert_eq!(MoonPhase::from_cycle_fraction(0.0), MoonPhase::New);
    /// assert_eq!(MoonPhase::from_cycle_fraction(0.5), MoonPhase::Full);
    /// assert_eq!(MoonPhase::from_cycle_fraction(0.97), MoonPhase::New);
    /// assert_eq!(MoonPhase::from_cycle_fraction(-0.25), MoonPhase::LastQuarter);
    /// ```
    pub fn from_cycle_fraction(fraction: f64) -> Self {
        let wrapped = fraction.rem_euclid(1.0);
        // Scale to eighths and round to the nearest; the mask folds the
        // round-up at the top of the cycle back onto New.
        let index = ((wrapped * PHASES_PER_CYCLE as f64) + 0.5).floor() as usize & 7;
        Self::ALL[index]
    }

    /// The phase that follows this one in the cycle (WaningCrescent wraps to New)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % PHASES_PER_CYCLE]
    }

    /// The phase that precedes this one in the cycle (New wraps to WaningCrescent)
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + PHASES_PER_CYCLE - 1) % PHASES_PER_CYCLE]
    }

    /// True for the growing half of the cycle (WaxingCrescent through WaxingGibbous)
    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }

    /// True for the shrinking half of the cycle (WaningGibbous through WaningCrescent)
    pub fn is_waning(&self) -> bool {
        matches!(
            self,
            Self::WaningGibbous | Self::LastQuarter | Self::WaningCrescent
        )
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
