//! Snapshot tests of full event transcripts using insta.
//!
//! Each transcript lists the events the engine received, one per line, in
//! the `Display` form of `ActionEvent`.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{ready_surface, TestEngine, Touches};

fn transcript(engine: &TestEngine) -> String {
    engine
        .events()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_pinch_with_promotion() {
    let (mut surface, engine) = ready_surface(2.0);
    let mut touches = Touches::new();

    let a = touches.put(1, 10.0, 20.0);
    surface.touches_began(&[a], &touches);
    let b = touches.put(2, 30.0, 40.0);
    surface.touches_began(&[b], &touches);

    touches.put(1, 12.0, 20.0);
    touches.put(2, 28.0, 40.0);
    surface.touches_moved(&[a, b], &touches);

    surface.touches_ended(&[a], &touches);
    touches.remove(1);

    touches.put(2, 25.0, 45.0);
    surface.touches_moved(&[b], &touches);
    surface.touches_ended(&[b], &touches);

    insta::assert_snapshot!(transcript(&engine), @r"
    PRIMARY_DOWN (20, 40) (none)
    SECONDARY_DOWN (20, 40) (60, 80)
    MOVE (24, 40) (56, 80)
    PRIMARY_UP (none) (56, 80)
    MOVE (50, 90) (none)
    PRIMARY_UP (none) (none)
    ");
}

#[test]
fn snapshot_both_cancelled_in_one_batch() {
    let (mut surface, engine) = ready_surface(1.0);
    let mut touches = Touches::new();

    let a = touches.put(1, 1.0, 2.0);
    let b = touches.put(2, 3.0, 4.0);
    surface.touches_began(&[a, b], &touches);
    surface.touches_began(&[a, b], &touches);
    surface.touches_cancelled(&[b, a], &touches);

    insta::assert_snapshot!(transcript(&engine), @r"
    PRIMARY_DOWN (1, 2) (none)
    SECONDARY_DOWN (1, 2) (3, 4)
    SECONDARY_UP (none) (none)
    PRIMARY_UP (none) (none)
    ");
}

#[test]
fn snapshot_secondary_lift_then_regrab() {
    let (mut surface, engine) = ready_surface(1.0);
    let mut touches = Touches::new();

    let a = touches.put(1, 100.0, 100.0);
    let b = touches.put(2, 200.0, 200.0);
    surface.touches_began(&[a], &touches);
    surface.touches_began(&[b], &touches);
    surface.touches_ended(&[b], &touches);
    touches.remove(2);

    let c = touches.put(3, 150.0, 50.0);
    surface.touches_began(&[c], &touches);
    surface.touches_moved(&[a, c], &touches);

    insta::assert_snapshot!(transcript(&engine), @r"
    PRIMARY_DOWN (100, 100) (none)
    SECONDARY_DOWN (100, 100) (200, 200)
    SECONDARY_UP (100, 100) (none)
    SECONDARY_DOWN (100, 100) (150, 50)
    MOVE (100, 100) (150, 50)
    ");
}
