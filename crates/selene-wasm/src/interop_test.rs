use tsify_next::Tsify;

use lunar_ephemeris::JulianDay;
use lunar_phase::{MoonPhase, PhaseAttributes};

use crate::LightSnapshot;

#[test]
fn test_light_snapshot_declares_typescript_interface() {
    let decl = <LightSnapshot as Tsify>::DECL;
    assert!(
        decl.contains("LightSnapshot"),
        "LightSnapshot should emit its own TypeScript declaration, got: {}",
        decl
    );
    // camelCase field names cross the boundary
    assert!(decl.contains("angleRadians"));
    assert!(decl.contains("direction"));
    assert!(decl.contains("position"));
}

#[test]
fn test_model_types_declare_their_own_typings() {
    // The model crates' Tsify derives (enabled through their `tsify`
    // features) own these declarations; this crate must not re-declare
    // them, or the generated .d.ts would carry duplicate identifiers.
    let julian_decl = <JulianDay as Tsify>::DECL;
    assert!(
        julian_decl.contains("JulianDay"),
        "JulianDay typing should come from the lunar-ephemeris derive, got: {}",
        julian_decl
    );
    // serde(transparent) newtype surfaces as a bare number
    assert!(julian_decl.contains("number"));

    assert!(<MoonPhase as Tsify>::DECL.contains("MoonPhase"));
    assert!(<PhaseAttributes as Tsify>::DECL.contains("PhaseAttributes"));
}
