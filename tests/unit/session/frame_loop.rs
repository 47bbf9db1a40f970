use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Viewport;
use crate::render::backend::RenderSettings;
use crate::render::surface::SurfaceRenderer;
use crate::runtime::viewport::FixedViewport;
use crate::wave::config::BackgroundConfig;

fn surface_mount(
    lp: &FrameLoop,
    viewport: Viewport,
) -> BackgroundMount<SurfaceRenderer, ManualScheduler, FixedViewport> {
    BackgroundMount::new(
        SurfaceRenderer::new(BackgroundConfig::canvas(), RenderSettings::default()),
        lp.scheduler(),
        FixedViewport::new(viewport),
    )
}

#[test]
fn pushes_requested_frames_in_order() {
    let lp = FrameLoop::new(Fps::new(10, 1).unwrap(), 4);
    let mut mount = surface_mount(&lp, Viewport::new(96.0, 54.0));
    let mut sink = InMemorySink::new();

    let stats = lp.run(&mut mount, &mut sink).unwrap();
    assert_eq!(stats.frames_pushed, 4);
    assert!(!stats.stalled);
    assert!((stats.last_elapsed - 0.3).abs() < 1e-9);

    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3]);
    assert_eq!(sink.config().unwrap().width, 96);
    assert!(sink.is_ended());
    assert_ne!(sink.frames()[0].1.data, sink.frames()[3].1.data);

    assert!(!mount.is_running());
    assert_eq!(mount.scheduler().pending(), None);
}

#[test]
fn unavailable_surface_is_reported() {
    let lp = FrameLoop::new(Fps::new(30, 1).unwrap(), 3);
    let mut mount = surface_mount(&lp, Viewport::new(0.0, 54.0));
    let mut sink = InMemorySink::new();

    let err = lp.run(&mut mount, &mut sink).unwrap_err();
    assert!(err.is_silent());
    assert!(sink.frames().is_empty());
    assert_eq!(mount.scheduler().schedule_calls(), 0);
}

#[test]
fn zero_frames_pushes_nothing() {
    let lp = FrameLoop::new(Fps::new(30, 1).unwrap(), 0);
    let mut mount = surface_mount(&lp, Viewport::new(16.0, 16.0));
    let mut sink = InMemorySink::new();
    let stats = lp.run(&mut mount, &mut sink).unwrap();
    assert_eq!(stats.frames_pushed, 0);
    assert!(sink.config().is_none());
}
