//! Explicit view state for a phase-presenting UI
//!
//! The presenting frontend fetches the current phase from an external
//! astronomy service keyed by observer location, and needs loading and
//! failure states while that happens. That lifecycle is modeled here as an
//! explicit state machine owned by the caller; this crate performs no I/O
//! and holds no process-wide state. The frontend drives the transitions
//! and reads the snapshot back out.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::attributes::PhaseAttributes;
use crate::phase::MoonPhase;

/// Observer coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ObserverLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl ObserverLocation {
    /// Fallback observer when location access is denied (San Francisco)
    pub const DEFAULT: ObserverLocation = ObserverLocation {
        latitude: 37.7749,
        longitude: -122.4194,
    };
}

impl std::fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Why a phase fetch failed
///
/// Presentation data, not control flow: the frontend renders the message
/// and may retry. Categories mirror the astronomy-service error codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum FetchFailure {
    /// The astronomy service rejected the request or is unreachable
    ServiceUnavailable,

    /// The observer location was missing or invalid
    LocationUnavailable,

    /// Transport-level failure between frontend and service
    Network,

    /// The user denied location access; the fallback observer is in use
    LocationDenied,

    /// Anything else, carrying the service's own description
    Other { message: String },
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceUnavailable => write!(f, "Astronomy service not available."),
            Self::LocationUnavailable => write!(f, "Location not available or invalid."),
            Self::Network => write!(f, "Network error. Please check your connection."),
            Self::LocationDenied => {
                write!(f, "Location access denied. Using default location.")
            }
            Self::Other { message } => write!(f, "Error fetching phase: {}", message),
        }
    }
}

/// The phase and its derived attributes at the moment a fetch resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PhaseReading {
    pub phase: MoonPhase,
    pub attributes: PhaseAttributes,
}

impl PhaseReading {
    pub fn of(phase: MoonPhase) -> Self {
        Self {
            phase,
            attributes: PhaseAttributes::of(phase),
        }
    }
}

/// Where the view is in its fetch lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum FetchStatus {
    /// No fetch started yet
    Idle,

    /// A fetch is in flight
    Loading,

    /// The last fetch succeeded
    Ready { reading: PhaseReading },

    /// The last fetch failed
    Failed { failure: FetchFailure },
}

/// Caller-owned presentation state for one phase view
///
/// Create one per view, drive it through `begin_fetch` → `resolve` /
/// `fail`, and read the fields back for display. A failed view keeps its
/// observer location so a retry reuses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PhaseViewState {
    /// Current fetch lifecycle position
    pub status: FetchStatus,

    /// Observer coordinates the fetch is keyed by, once known
    pub observer: Option<ObserverLocation>,
}

impl PhaseViewState {
    /// A fresh view: idle, no observer yet
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            observer: None,
        }
    }

    /// Record the observer coordinates the next fetch will use
    pub fn set_observer(&mut self, observer: ObserverLocation) {
        self.observer = Some(observer);
    }

    /// Mark a fetch as in flight, clearing any previous failure
    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// A fetch came back with a phase
    pub fn resolve(&mut self, phase: MoonPhase) {
        self.status = FetchStatus::Ready {
            reading: PhaseReading::of(phase),
        };
    }

    /// A fetch failed
    pub fn fail(&mut self, failure: FetchFailure) {
        self.status = FetchStatus::Failed { failure };
    }

    /// Location access was denied: adopt the fallback observer and surface
    /// the denial. The view can still retry against the fallback.
    pub fn fall_back_to_default_location(&mut self) {
        self.observer = Some(ObserverLocation::DEFAULT);
        self.status = FetchStatus::Failed {
            failure: FetchFailure::LocationDenied,
        };
    }

    /// True while a fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    /// The resolved phase, if the last fetch succeeded
    pub fn phase(&self) -> Option<MoonPhase> {
        match &self.status {
            FetchStatus::Ready { reading } => Some(reading.phase),
            _ => None,
        }
    }

    /// The resolved reading, if the last fetch succeeded
    pub fn reading(&self) -> Option<&PhaseReading> {
        match &self.status {
            FetchStatus::Ready { reading } => Some(reading),
            _ => None,
        }
    }

    /// The failure, if the last fetch failed
    pub fn failure(&self) -> Option<&FetchFailure> {
        match &self.status {
            FetchStatus::Failed { failure } => Some(failure),
            _ => None,
        }
    }
}

impl Default for PhaseViewState {
    fn default() -> Self {
        Self::new()
    }
}
