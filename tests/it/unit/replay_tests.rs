//! Unit tests for trace replay.

use mapview_input::config::SurfaceConfig;
use mapview_input::constants::NO_COORDINATE;
use mapview_input::replay::{replay, Trace, TraceStep};

const NO: f32 = NO_COORDINATE;

const TRACE: &str = r#"{
    "geometry": { "width": 320, "height": 480, "scale": 2.0 },
    "steps": [
        { "phase": "began", "touches": [{ "id": 1, "x": 5, "y": 5 }] },
        { "phase": "began", "touches": [{ "id": 2, "x": 8, "y": 8 }] },
        { "phase": "began", "touches": [{ "id": 3, "x": 9, "y": 9 }] },
        { "phase": "layout", "geometry": { "width": 320, "height": 480, "scale": 1.0 } },
        { "phase": "moved", "touches": [{ "id": 1, "x": 6, "y": 5 }] },
        { "phase": "cancelled", "touches": [{ "id": 1, "x": 6, "y": 5 }] },
        { "phase": "ended", "touches": [{ "id": 2, "x": 8, "y": 8 }] }
    ]
}"#;

#[test]
fn test_parse_trace() {
    let trace = Trace::from_json_str(TRACE).unwrap();
    assert_eq!(trace.geometry.scale, 2.0);
    assert_eq!(trace.steps.len(), 7);
    assert!(matches!(trace.steps[3], TraceStep::Layout { .. }));
}

#[test]
fn test_replay_events() {
    let trace = Trace::from_json_str(TRACE).unwrap();
    let wire: Vec<_> = replay(&trace, SurfaceConfig::default())
        .iter()
        .map(|e| e.to_wire())
        .collect();

    assert_eq!(
        wire,
        vec![
            (0, 10.0, 10.0, NO, NO),
            (1, 10.0, 10.0, 16.0, 16.0),
            (2, 6.0, 5.0, 8.0, 8.0),
            (4, NO, NO, 8.0, 8.0),
            (4, NO, NO, NO, NO),
        ]
    );
}

#[test]
fn test_geometry_scale_defaults_to_one() {
    let trace = Trace::from_json_str(r#"{ "geometry": { "width": 10, "height": 10 } }"#).unwrap();
    assert_eq!(trace.geometry.scale, 1.0);
    assert!(trace.steps.is_empty());
}
