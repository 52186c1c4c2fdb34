//! Collaborator contracts of a map surface.
//!
//! The map engine and the graphics context live outside this crate; the
//! surface only drives them through these traits.

use crate::error::SurfaceResult;
use crate::input::InputSink;

/// The map-interaction engine a surface feeds.
///
/// Input arrives through the [`InputSink`] supertrait; the remaining hooks
/// mirror the rendering lifecycle.
pub trait MapEngine: InputSink {
    /// The rendering context was created and made current
    fn on_surface_created(&mut self);

    /// The drawable size changed, in physical pixels
    fn on_surface_changed(&mut self, width: u32, height: u32);

    /// Draw one frame into the current context
    fn draw_frame(&mut self);

    /// Screen density used for symbol and label sizing
    fn set_dpi(&mut self, dpi: f32);

    /// The surface released its context and will not call back again
    fn on_surface_destroyed(&mut self) {}
}

/// A rendering context bound to one surface
pub trait GraphicsContext {
    /// Make this context current on the calling (UI) thread
    fn make_current(&self) -> SurfaceResult<()>;

    /// Unbind this context if it is current
    fn release_current(&self);
}

/// Creates the rendering context during surface initialization
pub trait ContextProvider {
    type Context: GraphicsContext;

    fn create_context(&mut self) -> SurfaceResult<Self::Context>;
}

/// Context for surfaces without a real GPU backend (replay, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessContext;

impl GraphicsContext for HeadlessContext {
    fn make_current(&self) -> SurfaceResult<()> {
        Ok(())
    }

    fn release_current(&self) {}
}

/// Provider that always hands out a [`HeadlessContext`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessProvider;

impl ContextProvider for HeadlessProvider {
    type Context = HeadlessContext;

    fn create_context(&mut self) -> SurfaceResult<HeadlessContext> {
        Ok(HeadlessContext)
    }
}
