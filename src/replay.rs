//! Touch trace replay.
//!
//! Feeds a recorded sequence of platform touch callbacks through a headless
//! [`MapSurface`] and collects the events the engine would have received.
//! Useful for reproducing input bugs reported from devices.
//!
//! Trace format:
//!
//! ```json
//! {
//!   "geometry": { "width": 320, "height": 480, "scale": 2.0 },
//!   "steps": [
//!     { "phase": "began", "touches": [{ "id": 1, "x": 5, "y": 5 }] },
//!     { "phase": "moved", "touches": [{ "id": 1, "x": 9, "y": 5 }] },
//!     { "phase": "layout", "geometry": { "width": 480, "height": 320, "scale": 2.0 } },
//!     { "phase": "ended", "touches": [{ "id": 1, "x": 9, "y": 5 }] }
//!   ]
//! }
//! ```

use crate::config::SurfaceConfig;
use crate::error::ConfigResult;
use crate::input::{ActionEvent, EventRecorder, InputSink, TouchId, TouchPoint};
use crate::surface::{HeadlessProvider, MapEngine, MapSurface, SurfaceGeometry, UiQueue};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub geometry: SurfaceGeometry,
    #[serde(default)]
    pub steps: Vec<TraceStep>,
}

/// One platform callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum TraceStep {
    Began { touches: Vec<TouchPoint> },
    Moved { touches: Vec<TouchPoint> },
    Ended { touches: Vec<TouchPoint> },
    Cancelled { touches: Vec<TouchPoint> },
    Layout { geometry: SurfaceGeometry },
}

impl Trace {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

/// Engine stand-in that only records input
#[derive(Debug, Clone, Default)]
pub struct ReplayEngine {
    recorder: EventRecorder,
}

impl ReplayEngine {
    pub fn new(recorder: EventRecorder) -> Self {
        Self { recorder }
    }
}

impl InputSink for ReplayEngine {
    fn submit_input_event(&mut self, event: ActionEvent) {
        self.recorder.submit_input_event(event);
    }
}

impl MapEngine for ReplayEngine {
    fn on_surface_created(&mut self) {}

    fn on_surface_changed(&mut self, _width: u32, _height: u32) {}

    fn draw_frame(&mut self) {}

    fn set_dpi(&mut self, _dpi: f32) {}
}

/// Replay `trace` and return every emitted event in order.
pub fn replay(trace: &Trace, config: SurfaceConfig) -> Vec<ActionEvent> {
    let recorder = EventRecorder::new();
    let mut queue = UiQueue::new();
    let mut surface = MapSurface::new(
        config,
        trace.geometry,
        ReplayEngine::new(recorder.clone()),
        HeadlessProvider,
        &mut queue,
    );
    queue.run_pending(&mut surface);

    // Touches the platform currently reports, tracked or not
    let mut live: Vec<TouchPoint> = Vec::new();

    for step in &trace.steps {
        match step {
            TraceStep::Began { touches } => {
                update_live(&mut live, touches);
                surface.touches_began(&ids(touches), &live);
            }
            TraceStep::Moved { touches } => {
                update_live(&mut live, touches);
                surface.touches_moved(&ids(touches), &live);
            }
            TraceStep::Ended { touches } => {
                update_live(&mut live, touches);
                surface.touches_ended(&ids(touches), &live);
                live.retain(|t| !touches.iter().any(|e| e.id == t.id));
            }
            TraceStep::Cancelled { touches } => {
                update_live(&mut live, touches);
                surface.touches_cancelled(&ids(touches), &live);
                live.retain(|t| !touches.iter().any(|e| e.id == t.id));
            }
            TraceStep::Layout { geometry } => {
                if let Err(e) = surface.on_layout(*geometry) {
                    tracing::warn!("Layout step failed: {}", e);
                }
            }
        }
    }

    recorder.take()
}

fn ids(touches: &[TouchPoint]) -> Vec<TouchId> {
    touches.iter().map(|t| t.id).collect()
}

fn update_live(live: &mut Vec<TouchPoint>, touches: &[TouchPoint]) {
    for touch in touches {
        match live.iter_mut().find(|t| t.id == touch.id) {
            Some(existing) => *existing = *touch,
            None => live.push(*touch),
        }
    }
}
