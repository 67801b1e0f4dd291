//! WASM bindings for the lunar phase model.
//!
//! This crate provides JavaScript/TypeScript bindings for the `lunar-phase`
//! and `lunar-ephemeris` crates, serving a browser frontend that renders a
//! 3D moon lit to match the current phase.
//!
//! # Architecture
//!
//! Stateless queries (phase attributes, light geometry, date snapshots) are
//! plain functions. Per-view presentation state lives in thread-local
//! storage (WASM is single-threaded): `viewer_create` returns an opaque ID
//! the other `viewer_*` functions take, and `viewer_snapshot` reads the
//! state back out as a serializable object.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! // What does tonight's moon look like?
//! const snapshot = lunation_snapshot(2024, 1, 25, 17, 0, 0);
//! console.log(`${snapshot.displayName}: ${snapshot.illuminationPercent}%`);
//!
//! // Where does the sun light go?
//! const light = light_snapshot("full", 2.0);
//! sunLight.position.set(...light.position);
//!
//! // Drive a view through a fetch
//! const viewerId = viewer_create();
//! viewer_begin_fetch(viewerId);
//! viewer_resolve_phase(viewerId, "waxingGibbous");
//! const view = viewer_snapshot(viewerId);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
mod interop_test;

use serde::Serialize;
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use lunar_ephemeris::{JulianDay, snapshot_at};
use lunar_phase::{
    FetchFailure, MoonPhase, ObserverLocation, PhaseAttributes, PhaseViewState, light_angle,
    light_direction, light_position,
};

// TypeScript declarations for JulianDay, MoonPhase, PhaseAttributes, etc.
// come from the Tsify derives in the model crates (enabled via their
// `tsify` features); only LightSnapshot is declared here.

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Stateless phase queries
// =============================================================================

/// Light placement for the renderer
#[derive(Clone, Debug, Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
#[tsify(into_wasm_abi)]
pub struct LightSnapshot {
    /// The phase the light was placed for
    pub phase: MoonPhase,
    /// Light angle in radians (0 = new, π = full)
    pub angle_radians: f64,
    /// Unit direction [x, y, z] from the moon toward the light
    pub direction: [f64; 3],
    /// Light position [x, y, z] at the requested distance
    pub position: [f64; 3],
}

/// All eight phases in cycle order.
#[wasm_bindgen]
pub fn moon_phases() -> Result<JsValue, JsError> {
    to_js(&MoonPhase::ALL.to_vec())
}

/// Derived attributes (name, illumination, light angle) for a phase.
#[wasm_bindgen]
pub fn phase_attributes(phase: JsValue) -> Result<JsValue, JsError> {
    let phase: MoonPhase = from_js(phase)?;
    to_js(&PhaseAttributes::of(phase))
}

/// Light angle, direction, and position for a phase.
///
/// # Arguments
/// * `phase` - The phase to light
/// * `distance` - How far from the moon to place the light entity
#[wasm_bindgen]
pub fn light_snapshot(phase: JsValue, distance: f64) -> Result<JsValue, JsError> {
    let phase: MoonPhase = from_js(phase)?;
    let angle = light_angle(phase);
    let direction = light_direction(angle);
    let position = light_position(angle, distance);

    to_js(&LightSnapshot {
        phase,
        angle_radians: angle,
        direction: [direction.x, direction.y, direction.z],
        position: [position.x, position.y, position.z],
    })
}

/// Full phase snapshot for a Gregorian calendar date and UT time of day.
///
/// # Arguments
/// * `year` - Calendar year (1583 onward)
/// * `month` - 1 = January through 12 = December
/// * `day` - Day of month
/// * `hour`, `minute`, `second` - UT time of day
#[wasm_bindgen]
pub fn lunation_snapshot(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<JsValue, JsError> {
    let jd = JulianDay::from_calendar(year, month, day, hour, minute, second);
    to_js(&snapshot_at(jd))
}

/// Julian day number for a Gregorian calendar date and UT time of day.
#[wasm_bindgen]
pub fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    JulianDay::from_calendar(year, month, day, hour, minute, second).value()
}

// =============================================================================
// Thread-local storage for viewer state
// =============================================================================

thread_local! {
    static VIEWERS: RefCell<HashMap<u32, PhaseViewState>> = RefCell::new(HashMap::new());
    static NEXT_VIEWER_ID: RefCell<u32> = const { RefCell::new(0) };
}

// =============================================================================
// Viewer management functions
// =============================================================================

/// Create a new phase viewer.
///
/// Returns a viewer ID for use with the other `viewer_*` functions.
#[wasm_bindgen]
pub fn viewer_create() -> u32 {
    let id = NEXT_VIEWER_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    VIEWERS.with(|viewers| {
        viewers.borrow_mut().insert(id, PhaseViewState::new());
    });

    id
}

/// Delete a viewer to free its state.
#[wasm_bindgen]
pub fn viewer_delete(viewer_id: u32) {
    VIEWERS.with(|viewers| {
        viewers.borrow_mut().remove(&viewer_id);
    });
}

/// Record the observer coordinates the next fetch will use.
#[wasm_bindgen]
pub fn viewer_set_observer(viewer_id: u32, latitude: f64, longitude: f64) -> Result<(), JsError> {
    VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        let view = viewers
            .get_mut(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        view.set_observer(ObserverLocation {
            latitude,
            longitude,
        });
        Ok(())
    })
}

/// Mark a fetch as in flight, clearing any previous failure.
#[wasm_bindgen]
pub fn viewer_begin_fetch(viewer_id: u32) -> Result<(), JsError> {
    VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        let view = viewers
            .get_mut(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        view.begin_fetch();
        Ok(())
    })
}

/// Resolve the in-flight fetch with a phase the service reported.
#[wasm_bindgen]
pub fn viewer_resolve_phase(viewer_id: u32, phase: JsValue) -> Result<(), JsError> {
    let phase: MoonPhase = from_js(phase)?;

    VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        let view = viewers
            .get_mut(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        view.resolve(phase);
        Ok(())
    })
}

/// Resolve the in-flight fetch from a calendar date via the synodic calendar.
///
/// A service-free alternative to `viewer_resolve_phase`: the phase for the
/// date is computed locally (±1 day accuracy).
#[wasm_bindgen]
pub fn viewer_resolve_date(
    viewer_id: u32,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<(), JsError> {
    let jd = JulianDay::from_calendar(year, month, day, hour, minute, second);
    let snapshot = snapshot_at(jd);

    VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        let view = viewers
            .get_mut(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        view.resolve(snapshot.phase);
        Ok(())
    })
}

/// Fail the in-flight fetch with a failure object (`{ type: "network" }` etc.).
#[wasm_bindgen]
pub fn viewer_fail(viewer_id: u32, failure: JsValue) -> Result<(), JsError> {
    let failure: FetchFailure = from_js(failure)?;

    VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        let view = viewers
            .get_mut(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        view.fail(failure);
        Ok(())
    })
}

/// Location access was denied: adopt the fallback observer and surface it.
#[wasm_bindgen]
pub fn viewer_use_fallback_location(viewer_id: u32) -> Result<(), JsError> {
    VIEWERS.with(|viewers| {
        let mut viewers = viewers.borrow_mut();
        let view = viewers
            .get_mut(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        view.fall_back_to_default_location();
        Ok(())
    })
}

/// True while the viewer's fetch is in flight.
#[wasm_bindgen]
pub fn viewer_is_loading(viewer_id: u32) -> Result<bool, JsError> {
    VIEWERS.with(|viewers| {
        let viewers = viewers.borrow();
        let view = viewers
            .get(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        Ok(view.is_loading())
    })
}

/// Read the full viewer state (status, reading, observer) for rendering.
#[wasm_bindgen]
pub fn viewer_snapshot(viewer_id: u32) -> Result<JsValue, JsError> {
    VIEWERS.with(|viewers| {
        let viewers = viewers.borrow();
        let view = viewers
            .get(&viewer_id)
            .ok_or_else(|| JsError::new(&format!("Viewer {} not found", viewer_id)))?;

        to_js(view)
    })
}
