//! Action events - the wire-level unit sent to the map engine.

use crate::error::UnknownActionCode;
use crate::input::coords::{CoordinateConverter, PhysicalPoint};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Action tag of an outbound input event.
///
/// The integer values are part of the engine contract and must not change.
/// `3` is reserved on the engine side for a cancel action, which this layer
/// never emits (cancel is reported as a normal pointer-up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ActionCode {
    /// First pointer touched down
    PrimaryDown = 0,
    /// Second pointer touched down while the first is active
    SecondaryDown = 1,
    /// One or both active pointers moved
    Move = 2,
    /// The primary pointer was lifted or cancelled
    PrimaryUp = 4,
    /// The secondary pointer was lifted or cancelled
    SecondaryUp = 5,
}

impl ActionCode {
    /// Stable integer value sent to the engine
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryDown => "PRIMARY_DOWN",
            Self::SecondaryDown => "SECONDARY_DOWN",
            Self::Move => "MOVE",
            Self::PrimaryUp => "PRIMARY_UP",
            Self::SecondaryUp => "SECONDARY_UP",
        }
    }
}

impl TryFrom<i32> for ActionCode {
    type Error = UnknownActionCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::PrimaryDown),
            1 => Ok(Self::SecondaryDown),
            2 => Ok(Self::Move),
            4 => Ok(Self::PrimaryUp),
            5 => Ok(Self::SecondaryUp),
            other => Err(UnknownActionCode(other)),
        }
    }
}

impl std::fmt::Display for ActionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized input event: an action plus the primary and secondary
/// coordinate pairs in physical pixels, with the sentinel for absent slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub action: ActionCode,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl ActionEvent {
    pub fn new(
        action: ActionCode,
        primary: Option<PhysicalPoint>,
        secondary: Option<PhysicalPoint>,
    ) -> Self {
        let (x1, y1) = CoordinateConverter::encode(primary);
        let (x2, y2) = CoordinateConverter::encode(secondary);
        Self { action, x1, y1, x2, y2 }
    }

    /// Primary pair, or None if it carries the sentinel
    pub fn primary(&self) -> Option<PhysicalPoint> {
        CoordinateConverter::decode(self.x1, self.y1)
    }

    /// Secondary pair, or None if it carries the sentinel
    pub fn secondary(&self) -> Option<PhysicalPoint> {
        CoordinateConverter::decode(self.x2, self.y2)
    }

    /// Flatten into the `(action, x1, y1, x2, y2)` wire tuple
    pub fn to_wire(&self) -> (i32, f32, f32, f32, f32) {
        (self.action.code(), self.x1, self.y1, self.x2, self.y2)
    }

    /// Rebuild an event from the wire tuple
    pub fn from_wire(
        (code, x1, y1, x2, y2): (i32, f32, f32, f32, f32),
    ) -> Result<Self, UnknownActionCode> {
        Ok(Self {
            action: ActionCode::try_from(code)?,
            x1,
            y1,
            x2,
            y2,
        })
    }
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn pair(f: &mut std::fmt::Formatter<'_>, p: Option<PhysicalPoint>) -> std::fmt::Result {
            match p {
                Some(p) => write!(f, "({}, {})", p.x, p.y),
                None => f.write_str("(none)"),
            }
        }
        write!(f, "{} ", self.action)?;
        pair(f, self.primary())?;
        f.write_str(" ")?;
        pair(f, self.secondary())
    }
}

/// The engine's input channel.
///
/// Forwarding is one-way: implementations must not block the caller and the
/// caller never inspects a result.
pub trait InputSink {
    fn submit_input_event(&mut self, event: ActionEvent);
}

impl<S: InputSink + ?Sized> InputSink for &mut S {
    fn submit_input_event(&mut self, event: ActionEvent) {
        (**self).submit_input_event(event);
    }
}

impl InputSink for Vec<ActionEvent> {
    fn submit_input_event(&mut self, event: ActionEvent) {
        self.push(event);
    }
}

/// Shareable sink that records every event it receives.
///
/// Clones share the same log, so one handle can be given to a surface while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<ActionEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<ActionEvent> {
        self.events.lock().clone()
    }

    /// Drain recorded events
    pub fn take(&self) -> Vec<ActionEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn last(&self) -> Option<ActionEvent> {
        self.events.lock().last().copied()
    }
}

impl InputSink for EventRecorder {
    fn submit_input_event(&mut self, event: ActionEvent) {
        self.events.lock().push(event);
    }
}
