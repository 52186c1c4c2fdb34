//! Two-phase construction, readiness gating, layout, draw and dispose.

use crate::helpers::{
    pending_surface, ready_surface, FailingProvider, LosableProvider, TestEngine, Touches,
};
use mapview_input::config::SurfaceConfig;
use mapview_input::error::SurfaceError;
use mapview_input::surface::{MapSurface, SurfaceGeometry, SurfaceStatus, UiQueue};

#[test]
fn test_initialization_is_deferred_to_queue() {
    let (mut surface, mut queue, engine) = pending_surface(2.0);
    assert_eq!(surface.status(), &SurfaceStatus::Pending);
    assert_eq!(queue.len(), 1);
    assert_eq!(engine.with_log(|log| log.created), 0);

    queue.run_pending(&mut surface);

    assert!(surface.is_ready());
    assert!(surface.needs_display());
    engine.with_log(|log| {
        assert_eq!(log.created, 1);
        assert_eq!(log.sizes, vec![(640, 960)]);
        assert_eq!(log.dpi, vec![320.0]);
    });
}

#[test]
fn test_touches_before_ready_are_dropped() {
    let (mut surface, mut queue, engine) = pending_surface(1.0);
    let mut touches = Touches::new();
    let a = touches.put(1, 1.0, 1.0);

    assert_eq!(surface.touches_began(&[a], &touches), 0);
    assert_eq!(surface.touches_moved(&[a], &touches), 0);
    assert!(surface.tracker().slots().is_empty());

    queue.run_pending(&mut surface);
    assert_eq!(surface.touches_began(&[a], &touches), 1);
    assert_eq!(engine.event_count(), 1);
}

#[test]
fn test_context_failure_is_fatal() {
    let engine = TestEngine::new();
    let mut queue = UiQueue::new();
    let provider = FailingProvider::default();
    let mut surface = MapSurface::new(
        SurfaceConfig::default(),
        SurfaceGeometry::new(100.0, 100.0, 1.0),
        engine.clone(),
        provider.clone(),
        &mut queue,
    );
    queue.run_pending(&mut surface);

    assert_eq!(
        surface.status(),
        &SurfaceStatus::Failed(SurfaceError::ContextCreation("no GLES2 support".to_string()))
    );
    assert_eq!(engine.with_log(|log| log.created), 0);

    // Not retried
    assert!(surface.initialize().is_err());
    assert!(surface.on_layout(SurfaceGeometry::new(200.0, 200.0, 1.0)).is_ok());
    assert_eq!(provider.attempts(), 1);

    let mut touches = Touches::new();
    let a = touches.put(1, 1.0, 1.0);
    assert_eq!(surface.touches_began(&[a], &touches), 0);
    assert!(surface.on_draw().is_err());
    assert_eq!(engine.event_count(), 0);
}

#[test]
fn test_draw_requires_ready() {
    let (mut surface, mut queue, engine) = pending_surface(1.0);
    assert_eq!(surface.on_draw(), Err(SurfaceError::NotReady("pending")));

    queue.run_pending(&mut surface);
    assert_eq!(surface.on_draw(), Ok(()));
    assert!(!surface.needs_display());
    assert_eq!(engine.with_log(|log| log.frames), 1);
}

#[test]
fn test_layout_rescales_input() {
    let (mut surface, engine) = ready_surface(1.0);
    let mut touches = Touches::new();
    let a = touches.put(1, 10.0, 10.0);

    surface
        .on_layout(SurfaceGeometry::new(200.0, 100.0, 3.0))
        .unwrap();
    surface.touches_began(&[a], &touches);

    assert_eq!(engine.events()[0].x1, 30.0);
    engine.with_log(|log| {
        assert_eq!(log.sizes.last(), Some(&(600, 300)));
        assert_eq!(log.dpi.last(), Some(&480.0));
    });
    assert!(surface.needs_display());
}

#[test]
fn test_layout_before_ready_is_used_by_initialization() {
    let (mut surface, mut queue, engine) = pending_surface(1.0);
    surface
        .on_layout(SurfaceGeometry::new(50.0, 40.0, 2.0))
        .unwrap();
    assert_eq!(engine.with_log(|log| log.sizes.len()), 0);

    queue.run_pending(&mut surface);
    assert_eq!(engine.with_log(|log| log.sizes.clone()), vec![(100, 80)]);
}

#[test]
fn test_dispose_releases_and_goes_inert() {
    let (mut surface, engine) = ready_surface(1.0);
    let mut touches = Touches::new();
    let a = touches.put(1, 1.0, 1.0);
    surface.touches_began(&[a], &touches);

    surface.dispose();

    assert_eq!(surface.status(), &SurfaceStatus::Disposed);
    assert!(engine.with_log(|log| log.destroyed));
    assert!(surface.tracker().slots().is_empty());
    assert_eq!(surface.touches_moved(&[a], &touches), 0);
    assert!(surface.on_draw().is_err());
}

#[test]
fn test_lost_context_reported_on_draw_and_layout() {
    let engine = TestEngine::new();
    let provider = LosableProvider::default();
    let mut queue = UiQueue::new();
    let mut surface = MapSurface::new(
        SurfaceConfig::default(),
        SurfaceGeometry::new(100.0, 100.0, 1.0),
        engine.clone(),
        provider.clone(),
        &mut queue,
    );
    queue.run_pending(&mut surface);
    assert_eq!(surface.on_draw(), Ok(()));

    provider.context.lose();

    assert!(matches!(surface.on_draw(), Err(SurfaceError::ContextLost(_))));
    assert!(matches!(
        surface.on_layout(SurfaceGeometry::new(50.0, 50.0, 1.0)),
        Err(SurfaceError::ContextLost(_))
    ));
    engine.with_log(|log| {
        assert_eq!(log.frames, 1);
        assert_eq!(log.sizes, vec![(100, 100)]);
    });
}
