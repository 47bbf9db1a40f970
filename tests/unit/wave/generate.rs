use super::*;
use crate::wave::config::BackgroundConfig;

#[test]
fn primary_first_instance_matches_known_points() {
    let cfg = BackgroundConfig::paths();
    let generator = WaveGenerator::new(&cfg);
    let primary = cfg.layer("primary").unwrap();

    let pts = generator.generate_design(primary, 0, 0.0, 1.0);
    assert_eq!(pts.len(), 11);
    assert_eq!(pts[0], Point::new(2400.0, 845.0));
    assert_eq!(pts[5], Point::new(-1200.0, -446.5));
    assert_eq!(pts[10], Point::new(-2400.0, -768.5));
}

#[test]
fn end_points_stack_by_instance_spacing() {
    let generator = WaveGenerator::new(&BackgroundConfig::paths());
    assert_eq!(generator.end_point(0), Point::new(-2400.0, -800.0));
    assert_eq!(generator.end_point(4), Point::new(-2400.0, -700.0));
}

#[test]
fn position_scales_x_only() {
    let cfg = BackgroundConfig::paths();
    let generator = WaveGenerator::new(&cfg);
    let accent = cfg.layer("accent").unwrap();

    let unit = generator.generate_design(accent, 2, 0.0, 1.0);
    let half = generator.generate_design(accent, 2, 0.0, 0.5);
    for (a, b) in unit.iter().zip(&half) {
        assert!((a.x * 0.5 - b.x).abs() < 1e-3);
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn phase_advances_with_index_and_ripple() {
    let cfg = BackgroundConfig::canvas();
    let generator = WaveGenerator::new(&cfg);
    let violet = cfg.layer("violet").unwrap();
    assert!((generator.phase(violet, 3, 0.0) - 0.6).abs() < 1e-12);
    assert!((generator.phase(violet, 0, 2.0) - 2.0 * violet.ripple_speed).abs() < 1e-12);
}

#[test]
fn sample_baseline_uses_out_quad_easing() {
    let cfg = BackgroundConfig::canvas();
    let generator = WaveGenerator::new(&cfg);
    let blue = cfg.layer("blue").unwrap();

    let s = generator.sample(blue, 0, 3, 0.0);
    assert_eq!(s.progress, 0.5);
    assert_eq!(s.eased, 0.75);
    assert_eq!(s.base, Point::new(-1200.0, -400.0));
}

#[test]
fn cover_transform_centers_and_crops() {
    let vb = WaveGeometry::default().view_box;

    // Wide viewport matching the 3:1 box maps edges onto edges.
    let xf = cover_transform(vb, Size::new(4800.0, 1600.0));
    assert_eq!(xf * Point::new(-2400.0, -800.0), Point::new(0.0, 0.0));

    // 4:3 viewport scales by height and crops horizontally.
    let xf = cover_transform(vb, Size::new(800.0, 600.0));
    assert_eq!(xf * Point::new(2400.0, 800.0), Point::new(1300.0, 600.0));
    assert_eq!(xf * Point::new(0.0, 0.0), Point::new(400.0, 300.0));
}

#[test]
fn exact_precision_skips_rounding() {
    let cfg = BackgroundConfig::paths();
    let exact = WaveGenerator::new(&cfg).with_precision(Precision::Exact);
    let primary = cfg.layer("primary").unwrap();
    let pts = exact.generate_design(primary, 0, 0.0, 1.0);
    assert!((pts[10].y + 768.5).abs() < 1e-9);
    assert!((pts[1].y - 605.846).abs() < 1e-3);
    assert_ne!(pts[1].y, 605.846);
}
