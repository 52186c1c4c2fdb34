//! Event normalizer - turns slot geometry into wire-level action events.

use crate::constants::DEFAULT_SCALE;
use crate::input::action::{ActionCode, ActionEvent, InputSink};
use crate::input::coords::{CoordinateConverter, PositionResolver, TouchId};

/// Builds [`ActionEvent`]s in physical pixels and forwards them to a sink.
///
/// The scale is the surface's device pixel density. It only changes when the
/// surface reports a new size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventNormalizer {
    scale: f32,
}

impl Default for EventNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

impl EventNormalizer {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Build an event from the identities occupying (or shown in) each pair.
    ///
    /// A missing identity, or one the resolver cannot place, yields the
    /// sentinel pair.
    pub fn normalize<R>(
        &self,
        action: ActionCode,
        primary: Option<TouchId>,
        secondary: Option<TouchId>,
        resolver: &R,
    ) -> ActionEvent
    where
        R: PositionResolver + ?Sized,
    {
        let locate = |id: Option<TouchId>| {
            id.and_then(|id| resolver.locate(id))
                .map(|p| CoordinateConverter::logical_to_physical(p, self.scale))
        };
        ActionEvent::new(action, locate(primary), locate(secondary))
    }

    /// Normalize and forward in one step. Returns the forwarded event.
    pub fn emit<R, S>(
        &self,
        sink: &mut S,
        action: ActionCode,
        primary: Option<TouchId>,
        secondary: Option<TouchId>,
        resolver: &R,
    ) -> ActionEvent
    where
        R: PositionResolver + ?Sized,
        S: InputSink + ?Sized,
    {
        let event = self.normalize(action, primary, secondary, resolver);
        tracing::trace!(%event, "Input event");
        sink.submit_input_event(event);
        event
    }
}
