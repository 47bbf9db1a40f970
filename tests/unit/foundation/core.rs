use super::*;

#[test]
fn fps_validation_and_conversions() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());

    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.as_f64(), 60.0);
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert!((fps.frames_to_secs(120) - 2.0).abs() < 1e-12);
}

#[test]
fn viewport_pixel_size_accounts_for_dpr() {
    let vp = Viewport::new(800.0, 600.0).with_device_pixel_ratio(2.0);
    assert_eq!(vp.pixel_size(), (1600, 1200));

    let fractional = Viewport::new(100.5, 10.0).with_device_pixel_ratio(1.5);
    assert_eq!(fractional.pixel_size(), (151, 15));
}

#[test]
fn viewport_bad_dpr_falls_back_to_one() {
    let vp = Viewport::new(10.0, 10.0).with_device_pixel_ratio(f64::NAN);
    assert_eq!(vp.dpr(), 1.0);
    assert_eq!(vp.pixel_size(), (10, 10));
}

#[test]
fn zero_area_viewport_is_not_drawable() {
    assert!(!Viewport::new(0.0, 600.0).is_drawable());
    assert!(!Viewport::new(800.0, -1.0).is_drawable());
    assert!(Viewport::new(1.0, 1.0).is_drawable());
}

#[test]
fn rgba_opacity_and_lerp() {
    let c = Rgba8::rgba(147, 51, 234, 128);
    assert_eq!(c.with_opacity(0.5).a, 64);
    assert_eq!(c.with_opacity(2.0).a, 128);

    let a = Rgba8::rgb(0, 0, 0);
    let b = Rgba8::rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(100, 50, 25));
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(b.hex(), "#c86432");
}
