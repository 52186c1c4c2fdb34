//! Unit tests for action codes and event encoding.

use mapview_input::constants::NO_COORDINATE;
use mapview_input::input::{ActionCode, ActionEvent, PhysicalPoint};
use mapview_input::UnknownActionCode;

#[test]
fn test_codes_are_distinct() {
    let codes = [
        ActionCode::PrimaryDown,
        ActionCode::SecondaryDown,
        ActionCode::Move,
        ActionCode::PrimaryUp,
        ActionCode::SecondaryUp,
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a.code(), b.code());
        }
        assert_eq!(ActionCode::try_from(a.code()), Ok(*a));
    }
}

#[test]
fn test_decode_unknown_code() {
    let err = ActionEvent::from_wire((42, 0.0, 0.0, 0.0, 0.0)).unwrap_err();
    assert_eq!(err, UnknownActionCode(42));
    assert_eq!(err.to_string(), "Unknown action code: 42");
}

#[test]
fn test_absent_pointer_distinct_from_origin() {
    let at_origin = ActionEvent::new(ActionCode::Move, Some(PhysicalPoint::new(0.0, 0.0)), None);
    assert_eq!(at_origin.primary(), Some(PhysicalPoint::new(0.0, 0.0)));
    assert_eq!(at_origin.secondary(), None);
    assert_eq!((at_origin.x2, at_origin.y2), (NO_COORDINATE, NO_COORDINATE));
}

#[test]
fn test_event_json_shape() {
    let event = ActionEvent::new(ActionCode::SecondaryUp, None, None);
    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["action"], "SECONDARY_UP");
    assert_eq!(json["x1"], f64::from(NO_COORDINATE));

    let back: ActionEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
