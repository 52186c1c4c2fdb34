//! Replays a recorded touch trace and prints the resulting engine events,
//! one JSON object per line.
//!
//! Usage: `mapview-input <trace.json> [config.json]`

use anyhow::{Context, Result, bail};
use mapview_input::config::SurfaceConfig;
use mapview_input::replay::{self, Trace};
use std::io::Write;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(trace_path) = args.next() else {
        bail!("usage: mapview-input <trace.json> [config.json]");
    };

    let config = match args.next() {
        Some(path) => SurfaceConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => SurfaceConfig::load_or_default(),
    };
    mapview_input::logging::init(&config.log_filter);

    let trace = Trace::load(&trace_path)
        .with_context(|| format!("Failed to load trace from {}", trace_path))?;
    tracing::info!(steps = trace.steps.len(), "Replaying {}", trace_path);

    let events = replay::replay(&trace, config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for event in &events {
        serde_json::to_writer(&mut out, event).context("Failed to encode event")?;
        writeln!(out)?;
    }
    tracing::info!(events = events.len(), "Replay finished");
    Ok(())
}
