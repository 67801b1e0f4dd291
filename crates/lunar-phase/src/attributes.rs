//! Derived per-phase attribute bundle for presentation consumers

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::geometry::light_angle;
use crate::illumination::{illuminated_fraction, illumination_percent};
use crate::phase::MoonPhase;

/// Everything a presentation or rendering collaborator needs for one phase
///
/// Stateless and computed on demand; carries no identity beyond the phase
/// it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PhaseAttributes {
    /// The phase these attributes were derived from
    pub phase: MoonPhase,

    /// Human-readable phase name (e.g. "Waxing Gibbous")
    pub display_name: String,

    /// Illuminated fraction of the disk, in [0, 1]
    pub illuminated_fraction: f64,

    /// Rounded 0-100 percentage for display
    pub illumination_percent: u8,

    /// Simulated-sunlight angle in radians, in [0, 2π)
    pub light_angle_radians: f64,
}

impl PhaseAttributes {
    /// Derive the full attribute bundle for a phase
    pub fn of(phase: MoonPhase) -> Self {
        Self {
            phase,
            display_name: phase.name().to_string(),
            illuminated_fraction: illuminated_fraction(phase),
            illumination_percent: illumination_percent(phase),
            light_angle_radians: light_angle(phase),
        }
    }
}

impl From<MoonPhase> for PhaseAttributes {
    fn from(phase: MoonPhase) -> Self {
        Self::of(phase)
    }
}
