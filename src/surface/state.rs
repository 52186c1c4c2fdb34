//! Surface state - the MapSurface struct and its status.

use crate::config::SurfaceConfig;
use crate::constants::DEFAULT_SCALE;
use crate::error::SurfaceError;
use crate::input::TouchTracker;
use crate::surface::engine::ContextProvider;
use serde::{Deserialize, Serialize};

/// Readiness of a surface.
///
/// ```text
/// Pending -> Ready     (context created)
/// Pending -> Failed    (context creation failed, fatal)
/// Ready   -> Disposed  (dispose)
/// ```
///
/// Touch, draw and layout work only happens in `Ready`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceStatus {
    /// Constructed, context initialization queued
    Pending,
    /// Context created and engine notified
    Ready,
    /// Context creation failed; the surface stays inert
    Failed(SurfaceError),
    /// Context released; the surface stays inert
    Disposed,
}

impl SurfaceStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Failed(_) => "failed",
            Self::Disposed => "disposed",
        }
    }
}

/// Logical size and device pixel scale of a surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    DEFAULT_SCALE
}

impl SurfaceGeometry {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self { width, height, scale }
    }

    /// Drawable size in physical pixels (truncated)
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.scale) as u32,
            (self.height * self.scale) as u32,
        )
    }
}

/// A drawing surface that forwards normalized touch input to a map engine.
///
/// Construction is two-phase: [`MapSurface::new`] queues context creation on
/// the UI queue, and the surface only becomes [`SurfaceStatus::Ready`] once
/// that task has run. Every touch, draw and layout entry point checks the
/// status first.
pub struct MapSurface<E, P: ContextProvider> {
    pub(super) config: SurfaceConfig,
    pub(super) geometry: SurfaceGeometry,
    pub(super) engine: E,
    pub(super) provider: P,
    pub(super) context: Option<P::Context>,
    pub(super) status: SurfaceStatus,
    pub(super) tracker: TouchTracker,
    pub(super) needs_display: bool,
}

impl<E, P: ContextProvider> MapSurface<E, P> {
    pub fn status(&self) -> &SurfaceStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Returns true if a redraw was requested since the last draw
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Request a redraw
    pub fn set_needs_display(&mut self) {
        self.needs_display = true;
    }
}
