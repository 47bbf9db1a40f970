use super::*;

fn renderer() -> SurfaceRenderer {
    SurfaceRenderer::new(BackgroundConfig::canvas(), RenderSettings::default())
}

#[test]
fn configure_sizes_surface_in_device_pixels() {
    let mut r = renderer();
    r.configure(Viewport::new(320.0, 180.0).with_device_pixel_ratio(2.0))
        .unwrap();
    assert_eq!(r.pixel_size(), Some((640, 360)));
    assert_eq!(r.viewport().unwrap().width, 320.0);
}

#[test]
fn missing_surface_is_silent() {
    let mut r = renderer();
    assert!(r.draw(0.0).unwrap_err().is_silent());
    assert!(r.snapshot().unwrap_err().is_silent());

    assert!(r.configure(Viewport::new(0.0, 100.0)).unwrap_err().is_silent());
    assert!(
        r.configure(Viewport::new(70_000.0, 100.0))
            .unwrap_err()
            .is_silent()
    );
    assert!(r.pixel_size().is_none());
}

#[test]
fn draw_is_deterministic_and_visible() {
    let mut r = renderer();
    r.configure(Viewport::new(320.0, 180.0)).unwrap();

    r.draw(1.25).unwrap();
    let a = r.snapshot().unwrap();
    r.draw(1.25).unwrap();
    let b = r.snapshot().unwrap();

    assert_eq!((a.width, a.height), (320, 180));
    assert!(a.premultiplied);
    assert!(a.covered_pixels() > 0);
    assert_eq!(a.data, b.data);
}

#[test]
fn frames_change_over_time() {
    let mut r = renderer();
    r.configure(Viewport::new(320.0, 180.0)).unwrap();
    r.draw(0.0).unwrap();
    let a = r.snapshot().unwrap();
    r.draw(3.0).unwrap();
    let b = r.snapshot().unwrap();
    assert_ne!(a.data, b.data);
}

#[test]
fn clear_color_fills_background() {
    let mut r = SurfaceRenderer::new(
        BackgroundConfig::canvas(),
        RenderSettings {
            clear: Rgba8::rgb(18, 20, 28),
        },
    );
    r.configure(Viewport::new(64.0, 64.0)).unwrap();
    r.draw(0.0).unwrap();
    let frame = r.snapshot().unwrap();
    assert_eq!(frame.covered_pixels(), 64 * 64);
}

#[test]
fn reconfigure_replaces_dimensions() {
    let mut r = renderer();
    let layer = r.config.layers[0].clone();

    r.configure(Viewport::new(800.0, 600.0)).unwrap();
    let small = r.instance_points(&layer, 0, 0.0);
    r.configure(Viewport::new(1600.0, 1200.0)).unwrap();
    let large = r.instance_points(&layer, 0, 0.0);

    assert_eq!(r.pixel_size(), Some((1600, 1200)));
    let (s, l) = (small.last().unwrap(), large.last().unwrap());
    assert!((l.x - 2.0 * s.x).abs() < 1e-9);
}

#[test]
fn gradient_layers_draw_on_surface() {
    let mut cfg = BackgroundConfig::paths();
    for layer in &mut cfg.layers {
        layer.stroke_width = crate::wave::layer::Ramp::new(40.0, 0.0);
    }
    let mut r = SurfaceRenderer::new(cfg, RenderSettings::default());
    r.configure(Viewport::new(160.0, 90.0)).unwrap();
    r.draw(0.0).unwrap();
    assert!(r.snapshot().unwrap().covered_pixels() > 0);
}

#[test]
fn float_offset_follows_cover_scale() {
    let mut r = SurfaceRenderer::new(BackgroundConfig::paths(), RenderSettings::default());
    let primary = r.config.layer("primary").unwrap().clone();
    assert_eq!(r.float_offset(&primary, 4.0), Vec2::ZERO);

    r.configure(Viewport::new(240.0, 120.0)).unwrap();
    // Cover scale is 120 / 1600 = 0.075; the primary group rises 15 units at half period.
    let lift = r.float_offset(&primary, 4.0);
    assert!(lift.x.abs() < 1e-12);
    assert!((lift.y + 1.125).abs() < 1e-9);
    assert!(r.float_offset(&primary, 0.0).y.abs() < 1e-12);

    let still = BackgroundConfig::canvas().layers[0].clone();
    assert_eq!(r.float_offset(&still, 4.0), Vec2::ZERO);
}
