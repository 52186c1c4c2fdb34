//! Multi-touch input normalization for the map surface.
//!
//! This module tracks up to two simultaneous touch pointers, assigns each a
//! stable role (primary / secondary) and emits one compact action event per
//! platform callback to the map engine.
//!
//! ## Architecture
//!
//! Platform touch callbacks feed the [`TouchTracker`], which updates the
//! [`PointerSlots`] and asks the [`EventNormalizer`] to build and forward an
//! [`ActionEvent`] from the now-updated slots. There is no state besides the
//! two slots.
//!
//! ## Modules
//!
//! - `coords` - Touch identities, logical/physical points, position lookup
//! - `slots` - Two-slot state machine with promotion
//! - `normalizer` - Slot geometry to scaled, sentinel-encoded events
//! - `action` - Action codes, events and the engine input channel
//! - `tracker` - Per-callback batch dispatch

mod action;
mod coords;
mod normalizer;
mod slots;
mod tracker;

pub use action::{ActionCode, ActionEvent, EventRecorder, InputSink};
pub use coords::{
    is_no_coordinate, CoordinateConverter, LogicalPoint, PhysicalPoint, PositionResolver,
    TouchId, TouchPoint,
};
pub use normalizer::EventNormalizer;
pub use slots::{Assignment, PointerSlots, Release, SlotOccupancy};
pub use tracker::TouchTracker;
