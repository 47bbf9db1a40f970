use super::*;

#[test]
fn presets_validate() {
    for preset in [Preset::Paths, Preset::GradientPaths, Preset::Canvas] {
        preset.config().validate().unwrap();
    }
}

#[test]
fn paths_preset_layer_families() {
    let cfg = BackgroundConfig::paths();
    let counts: Vec<_> = cfg
        .layers
        .iter()
        .map(|l| (l.name.as_str(), l.count, l.segments))
        .collect();
    assert_eq!(
        counts,
        vec![("primary", 12, 10), ("secondary", 15, 8), ("accent", 10, 6)]
    );
    assert_eq!(cfg.instance_count(), 37);
    assert_eq!(cfg.precision, Precision::MARKUP);
    assert!(cfg.layers.iter().all(|l| l.ripple_speed == 0.0));
}

#[test]
fn gradient_paths_adds_cycle_and_ripple() {
    let cfg = BackgroundConfig::gradient_paths();
    assert!(cfg.gradient.cycle.is_some());
    assert!(cfg.layers.iter().all(|l| l.ripple_speed > 0.0));
    assert_ne!(cfg.gradient.stops_at(2.0), cfg.gradient.stops_at(0.0));
}

#[test]
fn canvas_preset_uses_solid_named_layers() {
    let cfg = BackgroundConfig::canvas();
    assert!(cfg.layer("violet").is_some());
    assert!(cfg.layer("pink").is_some());
    assert!(cfg.layer("blue").is_some());
    assert!(
        cfg.layers
            .iter()
            .all(|l| matches!(l.paint, Paint::Solid { .. }))
    );
    assert_eq!(cfg.precision, Precision::Exact);
}

#[test]
fn json_roundtrip_through_file_format() {
    let cfg = BackgroundConfig::canvas();
    let json = cfg.to_json_pretty().unwrap();
    let back = BackgroundConfig::from_json_str(&json).unwrap();
    assert_eq!(cfg, back);
}

#[test]
fn json_geometry_defaults_when_omitted() {
    let mut value = serde_json::to_value(BackgroundConfig::paths()).unwrap();
    value.as_object_mut().unwrap().remove("geometry");
    let cfg = BackgroundConfig::from_json_str(&value.to_string()).unwrap();
    assert_eq!(cfg.geometry, WaveGeometry::default());
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = BackgroundConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, WavepathsError::Serde(_)));
}

#[test]
fn validation_rejects_bad_configs() {
    let mut cfg = BackgroundConfig::paths();
    cfg.layers.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = BackgroundConfig::paths();
    cfg.layers[1].name = "primary".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = BackgroundConfig::paths();
    cfg.geometry.tension = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = BackgroundConfig::paths();
    cfg.gradient.palette.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = BackgroundConfig::paths();
    cfg.geometry.view_box.width = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn view_box_attr_matches_design_space() {
    assert_eq!(
        WaveGeometry::default().view_box.attr(),
        "-2400 -800 4800 1600"
    );
}

#[test]
fn instances_follow_layer_order() {
    let cfg = BackgroundConfig::canvas();
    let all: Vec<WaveInstance> = cfg.instances().collect();
    assert_eq!(all.len(), cfg.instance_count());
    assert_eq!(all[0], WaveInstance { layer: 0, index: 0 });
    assert_eq!(all[8], WaveInstance { layer: 1, index: 0 });
    assert_eq!(all.last(), Some(&WaveInstance { layer: 2, index: 5 }));
}

#[test]
fn rejects_unsafe_gradient_id() {
    let mut cfg = BackgroundConfig::paths();
    cfg.gradient.id = "a\" onload=\"x".to_string();
    assert!(cfg.validate().is_err());
    cfg.gradient.id = String::new();
    assert!(cfg.validate().is_err());
}

#[test]
fn float_ease_is_selectable_from_json() {
    let mut value = serde_json::to_value(BackgroundConfig::paths()).unwrap();
    value["layers"][0]["float"]["ease"] = "linear".into();
    value["layers"][1]["float"]["ease"] = "in_out_quad".into();
    let cfg = BackgroundConfig::from_json_str(&value.to_string()).unwrap();

    let primary = cfg.layer("primary").unwrap().float.unwrap();
    let secondary = cfg.layer("secondary").unwrap().float.unwrap();
    assert_eq!(primary.ease, crate::animation::ease::Ease::Linear);
    assert_eq!(secondary.ease, crate::animation::ease::Ease::InOutQuad);

    // An eighth of the period is a quarter of the way to the peak.
    assert!((primary.offset_at(1.0) + 3.75).abs() < 1e-9);
    assert!((secondary.offset_at(0.75) + 1.25).abs() < 1e-9);
}
