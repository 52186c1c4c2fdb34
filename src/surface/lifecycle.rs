//! Surface lifecycle - construction, context bootstrap, layout, draw, dispose.

use super::{MapSurface, SurfaceGeometry, SurfaceStatus, UiQueue};
use crate::config::SurfaceConfig;
use crate::error::{SurfaceError, SurfaceResult};
use crate::input::TouchTracker;
use crate::surface::engine::{ContextProvider, GraphicsContext, MapEngine};
use tracing::{debug, error, info, warn};

impl<E, P> MapSurface<E, P>
where
    E: MapEngine + 'static,
    P: ContextProvider + 'static,
{
    /// Construct a surface and queue its context initialization on `queue`.
    ///
    /// The surface is `Pending` until the queue is pumped; touches delivered
    /// before then are dropped.
    pub fn new(
        config: SurfaceConfig,
        geometry: SurfaceGeometry,
        mut engine: E,
        provider: P,
        queue: &mut UiQueue<Self>,
    ) -> Self {
        engine.set_dpi(config.dpi_for_scale(geometry.scale));

        queue.dispatch_async(|surface: &mut Self| {
            // Failure is logged and kept in the status
            let _ = surface.initialize();
        });
        debug!(
            width = geometry.width,
            height = geometry.height,
            scale = geometry.scale,
            "Surface constructed, context initialization queued"
        );

        Self {
            config,
            geometry,
            engine,
            provider,
            context: None,
            status: SurfaceStatus::Pending,
            tracker: TouchTracker::new(geometry.scale),
            needs_display: false,
        }
    }
}

impl<E, P> MapSurface<E, P>
where
    E: MapEngine,
    P: ContextProvider,
{
    /// Create the graphics context and bring the engine up.
    ///
    /// Runs once; later calls return the outcome of the first. A failed
    /// context is fatal and is never retried.
    pub fn initialize(&mut self) -> SurfaceResult<()> {
        match &self.status {
            SurfaceStatus::Pending => {}
            SurfaceStatus::Ready => return Ok(()),
            SurfaceStatus::Failed(e) => return Err(e.clone()),
            SurfaceStatus::Disposed => return Err(SurfaceError::NotReady("disposed")),
        }

        let context = match self
            .provider
            .create_context()
            .and_then(|context| context.make_current().map(|()| context))
        {
            Ok(context) => context,
            Err(e) => {
                let e = match e {
                    SurfaceError::ContextCreation(_) => e,
                    other => SurfaceError::ContextCreation(other.to_string()),
                };
                error!("Surface initialization halted: {}", e);
                self.status = SurfaceStatus::Failed(e.clone());
                return Err(e);
            }
        };

        self.engine.on_surface_created();
        let (width, height) = self.geometry.physical_size();
        self.engine.on_surface_changed(width, height);

        self.context = Some(context);
        self.status = SurfaceStatus::Ready;
        self.needs_display = true;
        info!(width, height, "Surface ready");
        Ok(())
    }

    /// Apply a new surface size and device pixel scale.
    ///
    /// The scale is only ever re-read here. Before the surface is ready the
    /// geometry is just stored and picked up by initialization.
    pub fn on_layout(&mut self, geometry: SurfaceGeometry) -> SurfaceResult<()> {
        if geometry.scale != self.geometry.scale {
            self.tracker.set_scale(geometry.scale);
            self.engine.set_dpi(self.config.dpi_for_scale(geometry.scale));
        }
        self.geometry = geometry;

        if !self.is_ready() {
            return Ok(());
        }
        self.make_current()?;
        let (width, height) = geometry.physical_size();
        self.engine.on_surface_changed(width, height);
        self.needs_display = true;
        debug!(width, height, "Surface resized");
        Ok(())
    }

    /// Draw one frame. Only a ready surface draws.
    pub fn on_draw(&mut self) -> SurfaceResult<()> {
        if !self.is_ready() {
            return Err(SurfaceError::NotReady(self.status.name()));
        }
        self.make_current()?;
        self.engine.draw_frame();
        self.needs_display = false;
        Ok(())
    }

    /// Release the context and detach from the engine.
    ///
    /// Pointers still down are forgotten without events.
    pub fn dispose(&mut self) {
        if let Some(context) = self.context.take() {
            context.release_current();
            self.engine.on_surface_destroyed();
        }
        if !matches!(self.status, SurfaceStatus::Failed(_)) {
            self.status = SurfaceStatus::Disposed;
        }
        self.tracker.reset();
        info!("Surface disposed");
    }

    fn make_current(&self) -> SurfaceResult<()> {
        let Some(context) = &self.context else {
            return Err(SurfaceError::NotReady(self.status.name()));
        };
        context.make_current().map_err(|e| {
            let e = match e {
                SurfaceError::ContextLost(_) => e,
                other => SurfaceError::ContextLost(other.to_string()),
            };
            warn!("Failed to make context current: {}", e);
            e
        })
    }
}

