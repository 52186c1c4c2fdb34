//! Map surface - the platform-facing glue around the input layer.
//!
//! - `state` - The MapSurface struct, its status and geometry
//! - `lifecycle` - Two-phase construction, layout, draw and dispose
//! - `touch` - Touch callbacks gated on readiness
//! - `engine` - Engine and graphics-context collaborator traits
//! - `queue` - UI-thread task queue used for the deferred context bootstrap

mod engine;
mod lifecycle;
mod queue;
mod state;
mod touch;

pub use engine::{ContextProvider, GraphicsContext, HeadlessContext, HeadlessProvider, MapEngine};
pub use queue::UiQueue;
pub use state::{MapSurface, SurfaceGeometry, SurfaceStatus};
