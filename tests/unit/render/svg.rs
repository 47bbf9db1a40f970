use super::*;
use crate::foundation::core::Viewport;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn document_has_one_path_per_instance() {
    let scene = SvgScene::new(BackgroundConfig::paths());
    let doc = scene.document(0.0, SvgFrameOpts::default());

    assert!(doc.starts_with("<svg "));
    assert!(doc.ends_with("</svg>"));
    assert!(doc.contains(r#"viewBox="-2400 -800 4800 1600""#));
    assert!(doc.contains(r#"preserveAspectRatio="xMidYMid slice""#));
    assert!(doc.contains("<title>Background Paths</title>"));
    assert_eq!(count(&doc, "<path "), 37);
    assert_eq!(count(&doc, "<g "), 3);
    assert!(doc.contains(r#"<g class="secondary-waves" opacity="0.8">"#));
    assert!(doc.contains(r#"<g class="accent-waves" opacity="0.6">"#));
}

#[test]
fn gradient_defs_match_palette() {
    let doc = SvgScene::new(BackgroundConfig::paths()).document(0.0, SvgFrameOpts::default());
    assert!(doc.contains(r#"<linearGradient id="sharedGradient" x1="0%" y1="0%" x2="100%" y2="0%">"#));
    assert!(doc.contains(r##"<stop offset="0%" stop-color="#9333ea" stop-opacity="0.502"/>"##));
    assert!(doc.contains(r##"<stop offset="50%" stop-color="#ec4899" stop-opacity="0.502"/>"##));
    assert!(doc.contains(r##"<stop offset="100%" stop-color="#3b82f6" stop-opacity="0.502"/>"##));
    assert_eq!(count(&doc, r#"stroke="url(#sharedGradient)""#), 37);
}

#[test]
fn first_primary_path_is_stable() {
    let scene = SvgScene::new(BackgroundConfig::paths());
    let primary = scene.config().layer("primary").unwrap().clone();
    let d = scene.path_data(&primary, 0, 0.0);
    assert!(d.starts_with("M 2400 845 C 2035.2 845, 1852.8 605.846, 1488 605.846"));
    assert!(d.ends_with("-2400 -768.5"));
    assert_eq!(d, scene.path_data(&primary, 0, 0.0));
}

#[test]
fn instance_styles_follow_ramps() {
    let doc = SvgScene::new(BackgroundConfig::paths()).document(0.0, SvgFrameOpts::default());
    assert!(doc.contains(r#"id="primary-0""#));
    assert!(doc.contains(r#"stroke-width="4" stroke-linecap="round" opacity="0.15""#));
    assert!(doc.contains(r#"id="accent-9""#));
    assert!(doc.contains(r#"stroke-width="3.8" stroke-linecap="round" opacity="0.188""#));
}

#[test]
fn baked_float_moves_groups() {
    let scene = SvgScene::new(BackgroundConfig::paths());
    let opts = SvgFrameOpts {
        size: Some(Size::new(800.0, 600.0)),
        bake_float: true,
    };
    let at_rest = scene.document(0.0, opts);
    assert!(!at_rest.contains("transform="));
    assert!(at_rest.contains(r#"width="800" height="600""#));

    let moving = scene.document(2.0, opts);
    assert!(moving.contains(r#"<g class="primary-waves" transform="translate(0 -7.5)">"#));
}

#[test]
fn solid_layers_use_hex_strokes() {
    let doc = SvgScene::new(BackgroundConfig::canvas()).document(0.0, SvgFrameOpts::default());
    assert!(doc.contains(r##"stroke="#9333ea""##));
    assert!(doc.contains(r##"stroke="#3b82f6""##));
    assert_eq!(count(&doc, "<path "), 22);
}

#[test]
fn backdrop_markup_is_pointer_transparent() {
    let markup = SvgScene::new(BackgroundConfig::paths()).backdrop_markup();
    assert!(markup.contains("pointer-events:none"));
    assert!(markup.contains("position:absolute;inset:0"));
    assert!(markup.contains("@keyframes float-primary"));
    assert!(markup.contains(".accent-waves {"));
    assert!(markup.contains(r#"width="100%" height="100%""#));
    assert!(!markup.contains("transform=\"translate"));
}

fn bold_paths() -> BackgroundConfig {
    let mut cfg = BackgroundConfig::paths();
    for layer in &mut cfg.layers {
        layer.stroke_width = crate::wave::layer::Ramp::new(60.0, 0.0);
        layer.opacity = crate::wave::layer::Ramp::new(1.0, 0.0);
    }
    cfg
}

#[test]
fn renderer_draws_visible_pixels() {
    let mut r = SvgRenderer::new(bold_paths(), RenderSettings::default());
    r.configure(Viewport::new(96.0, 48.0)).unwrap();
    r.draw(0.0).unwrap();
    let frame = r.snapshot().unwrap();
    assert_eq!((frame.width, frame.height), (96, 48));
    assert!(frame.premultiplied);
    assert!(frame.covered_pixels() > 0);
}

#[test]
fn renderer_without_surface_reports_unavailable() {
    let mut r = SvgRenderer::new(BackgroundConfig::paths(), RenderSettings::default());
    assert!(r.draw(0.0).unwrap_err().is_silent());
    assert!(r.configure(Viewport::new(0.0, 10.0)).unwrap_err().is_silent());
    assert!(r.viewport().is_none());
}
