//! Touch tracker - per-callback dispatch of platform touch batches.
//!
//! Each platform callback delivers an unordered batch of touch identities.
//! The tracker applies the slot rules for that batch and emits the resulting
//! events through the normalizer, re-resolving current positions for every
//! live slot.
//!
//! - begin: only the first untracked touch of the batch is processed, so a
//!   begin callback emits at most one event.
//! - move: one event reflecting whichever slots are occupied.
//! - end / cancel: secondary is released before primary. Both may be
//!   released by the same batch, in which case each gets its own event so
//!   no slot outlives its touch.

use crate::input::action::{ActionCode, InputSink};
use crate::input::coords::{PositionResolver, TouchId};
use crate::input::normalizer::EventNormalizer;
use crate::input::slots::{Assignment, PointerSlots, Release, SlotOccupancy};
use tracing::debug;

/// Owns the two pointer slots and the normalizer of one surface.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    slots: PointerSlots,
    normalizer: EventNormalizer,
}

impl TouchTracker {
    pub fn new(scale: f32) -> Self {
        Self {
            slots: PointerSlots::new(),
            normalizer: EventNormalizer::new(scale),
        }
    }

    pub fn slots(&self) -> &PointerSlots {
        &self.slots
    }

    pub fn occupancy(&self) -> SlotOccupancy {
        self.slots.occupancy()
    }

    pub fn scale(&self) -> f32 {
        self.normalizer.scale()
    }

    /// Update the device pixel scale (surface size change only)
    pub fn set_scale(&mut self, scale: f32) {
        self.normalizer.set_scale(scale);
    }

    /// Handle a touch-begin batch. Returns the number of events emitted (0 or 1).
    pub fn touches_began<R, S>(&mut self, touches: &[TouchId], resolver: &R, sink: &mut S) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        let Some(id) = touches.iter().copied().find(|id| !self.slots.contains(*id)) else {
            return 0;
        };

        match self.slots.begin(id) {
            Some(Assignment::Primary) => {
                debug!(touch = %id, "Primary pointer down");
                self.normalizer
                    .emit(sink, ActionCode::PrimaryDown, Some(id), None, resolver);
                1
            }
            Some(Assignment::Secondary) => {
                debug!(touch = %id, "Secondary pointer down");
                self.normalizer.emit(
                    sink,
                    ActionCode::SecondaryDown,
                    self.slots.primary(),
                    Some(id),
                    resolver,
                );
                1
            }
            None => {
                debug!(touch = %id, "Both pointer slots taken, ignoring touch");
                0
            }
        }
    }

    /// Handle a touch-move batch. Returns the number of events emitted (0 or 1).
    ///
    /// The batch contents are irrelevant: positions of all occupied slots are
    /// re-resolved.
    pub fn touches_moved<R, S>(&mut self, _touches: &[TouchId], resolver: &R, sink: &mut S) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        if self.slots.is_empty() {
            return 0;
        }
        self.normalizer.emit(
            sink,
            ActionCode::Move,
            self.slots.primary(),
            self.slots.secondary(),
            resolver,
        );
        1
    }

    /// Handle a touch-end batch. Returns the number of events emitted.
    pub fn touches_ended<R, S>(&mut self, touches: &[TouchId], resolver: &R, sink: &mut S) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        self.release(touches, resolver, sink)
    }

    /// Handle a touch-cancel batch.
    ///
    /// Some platforms deliver cancel for an ordinary lift, so cancel follows
    /// exactly the same rules as end, promotion included.
    pub fn touches_cancelled<R, S>(
        &mut self,
        touches: &[TouchId],
        resolver: &R,
        sink: &mut S,
    ) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        debug!(count = touches.len(), "Touches cancelled, handling as end");
        self.release(touches, resolver, sink)
    }

    /// Single-touch form of [`Self::touches_began`]
    pub fn begin<R, S>(&mut self, id: TouchId, resolver: &R, sink: &mut S) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        self.touches_began(&[id], resolver, sink)
    }

    /// Single-touch form of [`Self::touches_ended`]
    pub fn end<R, S>(&mut self, id: TouchId, resolver: &R, sink: &mut S) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        self.touches_ended(&[id], resolver, sink)
    }

    /// Single-touch form of [`Self::touches_cancelled`]
    pub fn cancel<R, S>(&mut self, id: TouchId, resolver: &R, sink: &mut S) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        self.touches_cancelled(&[id], resolver, sink)
    }

    /// Drop both pointers without emitting anything
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    fn release<R, S>(&mut self, touches: &[TouchId], resolver: &R, sink: &mut S) -> usize
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        let mut emitted = 0;

        if let Some(secondary) = self.slots.secondary().filter(|id| touches.contains(id)) {
            let primary_leaving = self.slots.primary().is_some_and(|id| touches.contains(&id));
            if self.slots.end(secondary) == Some(Release::Secondary) {
                debug!(touch = %secondary, "Secondary pointer up");
                // Report the primary only if it outlives this batch
                let primary = if primary_leaving { None } else { self.slots.primary() };
                self.normalizer
                    .emit(sink, ActionCode::SecondaryUp, primary, None, resolver);
                emitted += 1;
            }
        }

        if let Some(primary) = self.slots.primary().filter(|id| touches.contains(id)) {
            if let Some(Release::Primary { promoted }) = self.slots.end(primary) {
                match promoted {
                    Some(next) => debug!(
                        touch = %primary,
                        promoted = %next,
                        "Primary pointer up, promoting secondary"
                    ),
                    None => debug!(touch = %primary, "Primary pointer up"),
                }
                self.normalizer
                    .emit(sink, ActionCode::PrimaryUp, None, promoted, resolver);
                emitted += 1;
            }
        }

        emitted
    }
}
