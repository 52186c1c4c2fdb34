//! Touch callbacks of a surface.
//!
//! Thin gate in front of the [`crate::input::TouchTracker`]: callbacks that
//! arrive before the surface is ready (or after it failed or was disposed)
//! are dropped, everything else is forwarded to the engine's input channel.

use super::MapSurface;
use crate::input::{PositionResolver, TouchId};
use crate::surface::engine::{ContextProvider, MapEngine};
use tracing::debug;

impl<E, P> MapSurface<E, P>
where
    E: MapEngine,
    P: ContextProvider,
{
    pub fn touches_began<R>(&mut self, touches: &[TouchId], resolver: &R) -> usize
    where
        R: PositionResolver + ?Sized,
    {
        if !self.accepts_touches("began") {
            return 0;
        }
        self.tracker.touches_began(touches, resolver, &mut self.engine)
    }

    pub fn touches_moved<R>(&mut self, touches: &[TouchId], resolver: &R) -> usize
    where
        R: PositionResolver + ?Sized,
    {
        if !self.accepts_touches("moved") {
            return 0;
        }
        self.tracker.touches_moved(touches, resolver, &mut self.engine)
    }

    pub fn touches_ended<R>(&mut self, touches: &[TouchId], resolver: &R) -> usize
    where
        R: PositionResolver + ?Sized,
    {
        if !self.accepts_touches("ended") {
            return 0;
        }
        self.tracker.touches_ended(touches, resolver, &mut self.engine)
    }

    pub fn touches_cancelled<R>(&mut self, touches: &[TouchId], resolver: &R) -> usize
    where
        R: PositionResolver + ?Sized,
    {
        if !self.accepts_touches("cancelled") {
            return 0;
        }
        self.tracker.touches_cancelled(touches, resolver, &mut self.engine)
    }

    fn accepts_touches(&self, phase: &'static str) -> bool {
        if self.is_ready() {
            return true;
        }
        debug!(phase, status = self.status.name(), "Dropping touches, surface not ready");
        false
    }
}
