//! Coordinate types and conversion for touch input.
//!
//! Platform positions arrive in the surface's local (logical) space and are
//! emitted to the engine in physical pixels. An absent pair is encoded with
//! [`NO_COORDINATE`] rather than zero.

use crate::constants::NO_COORDINATE;
use serde::{Deserialize, Serialize};

/// Opaque platform-assigned identity of one touch contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchId(pub u64);

impl std::fmt::Display for TouchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A position in the surface's local coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalPoint {
    pub x: f32,
    pub y: f32,
}

impl LogicalPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A position in physical pixels, as the engine expects it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysicalPoint {
    pub x: f32,
    pub y: f32,
}

impl PhysicalPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Resolves a touch identity to its current on-surface position.
///
/// Implemented by the platform glue (or a test double). Returning `None`
/// makes the corresponding slot emit the sentinel pair.
pub trait PositionResolver {
    fn locate(&self, id: TouchId) -> Option<LogicalPoint>;
}

/// A touch reported together with its position, e.g. one entry of a
/// platform touch list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: TouchId,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub const fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id: TouchId(id), x, y }
    }

    #[inline]
    pub fn position(&self) -> LogicalPoint {
        LogicalPoint::new(self.x, self.y)
    }
}

/// A list of live touches resolves positions by linear lookup.
impl PositionResolver for [TouchPoint] {
    fn locate(&self, id: TouchId) -> Option<LogicalPoint> {
        self.iter().find(|t| t.id == id).map(TouchPoint::position)
    }
}

impl PositionResolver for Vec<TouchPoint> {
    fn locate(&self, id: TouchId) -> Option<LogicalPoint> {
        self.as_slice().locate(id)
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a surface-local position to physical pixels
    #[inline]
    pub fn logical_to_physical(pos: LogicalPoint, scale: f32) -> PhysicalPoint {
        PhysicalPoint::new(pos.x * scale, pos.y * scale)
    }

    /// Encode an optional pair for the wire, using the sentinel when absent
    #[inline]
    pub fn encode(pos: Option<PhysicalPoint>) -> (f32, f32) {
        match pos {
            Some(p) => (p.x, p.y),
            None => (NO_COORDINATE, NO_COORDINATE),
        }
    }

    /// Decode a wire pair back into an optional position
    #[inline]
    pub fn decode(x: f32, y: f32) -> Option<PhysicalPoint> {
        if is_no_coordinate(x) && is_no_coordinate(y) {
            None
        } else {
            Some(PhysicalPoint::new(x, y))
        }
    }
}

/// Returns true if `v` is the "no coordinate" sentinel
#[inline]
pub fn is_no_coordinate(v: f32) -> bool {
    v == NO_COORDINATE
}
