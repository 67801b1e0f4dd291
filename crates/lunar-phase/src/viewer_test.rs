use crate::phase::MoonPhase;
use crate::viewer::{FetchFailure, FetchStatus, ObserverLocation, PhaseViewState};

#[test]
fn test_new_view_is_idle_with_no_observer() {
    let view = PhaseViewState::new();
    assert_eq!(view.status, FetchStatus::Idle);
    assert_eq!(view.observer, None);
    assert!(!view.is_loading());
    assert_eq!(view.phase(), None);
    assert_eq!(view.failure(), None);

    assert_eq!(PhaseViewState::default(), view);
}

#[test]
fn test_fetch_resolves_to_ready() {
    let mut view = PhaseViewState::new();
    view.set_observer(ObserverLocation {
        latitude: 51.4769,
        longitude: 0.0,
    });

    view.begin_fetch();
    assert!(view.is_loading());

    view.resolve(MoonPhase::WaxingGibbous);
    assert!(!view.is_loading());
    assert_eq!(view.phase(), Some(MoonPhase::WaxingGibbous));

    let reading = view.reading().expect("resolved view should carry a reading");
    assert_eq!(reading.attributes.display_name, "Waxing Gibbous");
    assert_eq!(reading.attributes.illumination_percent, 75);
}

#[test]
fn test_fetch_failure_keeps_observer_for_retry() {
    let greenwich = ObserverLocation {
        latitude: 51.4769,
        longitude: 0.0,
    };
    let mut view = PhaseViewState::new();
    view.set_observer(greenwich);

    view.begin_fetch();
    view.fail(FetchFailure::Network);
    assert_eq!(view.failure(), Some(&FetchFailure::Network));
    assert_eq!(view.observer, Some(greenwich));

    // Retrying clears the failure
    view.begin_fetch();
    assert!(view.is_loading());
    assert_eq!(view.failure(), None);
}

#[test]
fn test_fallback_location_is_san_francisco() {
    let mut view = PhaseViewState::new();
    view.fall_back_to_default_location();

    let observer = view.observer.expect("fallback should set an observer");
    assert_eq!(observer.latitude, 37.7749);
    assert_eq!(observer.longitude, -122.4194);
    assert_eq!(view.failure(), Some(&FetchFailure::LocationDenied));

    // A retry against the fallback observer can still succeed
    view.begin_fetch();
    view.resolve(MoonPhase::New);
    assert_eq!(view.phase(), Some(MoonPhase::New));
    assert_eq!(view.observer, Some(ObserverLocation::DEFAULT));
}

#[test]
fn test_failure_messages() {
    assert_eq!(
        FetchFailure::ServiceUnavailable.to_string(),
        "Astronomy service not available."
    );
    assert_eq!(
        FetchFailure::LocationUnavailable.to_string(),
        "Location not available or invalid."
    );
    assert_eq!(
        FetchFailure::Network.to_string(),
        "Network error. Please check your connection."
    );
    assert_eq!(
        FetchFailure::LocationDenied.to_string(),
        "Location access denied. Using default location."
    );
    assert_eq!(
        FetchFailure::Other {
            message: "service quota exceeded".to_string()
        }
        .to_string(),
        "Error fetching phase: service quota exceeded"
    );
}

#[test]
fn test_observer_location_display() {
    assert_eq!(ObserverLocation::DEFAULT.to_string(), "37.7749, -122.4194");
}

#[test]
fn test_view_state_serializes_with_status_tag() {
    let mut view = PhaseViewState::new();
    view.begin_fetch();
    view.resolve(MoonPhase::Full);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status"]["status"], "ready");
    assert_eq!(json["status"]["reading"]["phase"], "full");

    let back: PhaseViewState = serde_json::from_value(json).unwrap();
    assert_eq!(back, view);

    let mut failed = PhaseViewState::new();
    failed.fail(FetchFailure::ServiceUnavailable);
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["status"]["status"], "failed");
    assert_eq!(json["status"]["failure"]["type"], "serviceUnavailable");
}
