use chrono::NaiveDate;
use timeline_rs::TimelineError;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{ScaleLevel, ViewportSize};
use timeline_rs::render::NullRenderer;

fn viewport() -> ViewportSize {
    ViewportSize::new(390.0, 844.0)
}

#[test]
fn defaults_match_documented_tuning() {
    let config = TimelineEngineConfig::new(viewport());
    assert_eq!(config.min_unit_height, 60.0);
    assert_eq!(config.initial_level, ScaleLevel::Hour);
    assert_eq!(config.touch_slop_px, 8.0);
    assert_eq!(config.velocity_gate_px_per_sec, 300.0);
    assert_eq!(config.drag_sensitivity, 0.5);
    assert_eq!(config.velocity_boost, 1.0);
    assert_eq!(config.friction_multiplier, 0.9);
    assert_eq!(config.max_level_switch_iterations, 100);
    assert_eq!(config.scroll_to_now_duration_ms, 600.0);
    assert_eq!(config.now_anchor_ratio, 0.2);
    assert!(config.validate().is_ok());
}

#[test]
fn json_round_trip_preserves_overrides() {
    let config = TimelineEngineConfig::new(viewport())
        .with_initial_level(ScaleLevel::Month, 150.0)
        .with_velocity_gate(450.0)
        .with_drag_response(0.75, 1.2)
        .with_now_anchor_ratio(0.5);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = TimelineEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = TimelineEngineConfig::from_json_str(
        r#"{ "viewport": { "width": 390.0, "height": 844.0 }, "touch_slop_px": 12.0 }"#,
    )
    .expect("parse");
    assert_eq!(parsed.touch_slop_px, 12.0);
    assert_eq!(parsed, TimelineEngineConfig::new(viewport()).with_touch_slop_px(12.0));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = TimelineEngineConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, TimelineError::Serialization(_)));
}

#[test]
fn invalid_values_are_rejected_at_engine_boundary() {
    let now = NaiveDate::from_ymd_opt(2026, 10, 18)
        .expect("date")
        .and_hms_opt(12, 0, 0)
        .expect("time");

    let bad_viewport = TimelineEngineConfig::new(ViewportSize::new(0.0, 844.0));
    assert!(matches!(
        TimelineEngine::new(NullRenderer::default(), bad_viewport, now),
        Err(TimelineError::InvalidViewport { .. })
    ));

    for config in [
        TimelineEngineConfig::new(viewport()).with_min_unit_height(f64::NAN),
        TimelineEngineConfig::new(viewport()).with_initial_level(ScaleLevel::Day, 10.0),
        TimelineEngineConfig::new(viewport()).with_friction_multiplier(0.0),
        TimelineEngineConfig::new(viewport()).with_now_anchor_ratio(1.5),
        TimelineEngineConfig::new(viewport()).with_drag_response(-1.0, 1.0),
    ] {
        assert!(matches!(
            TimelineEngine::new(NullRenderer::default(), config, now),
            Err(TimelineError::InvalidConfig(_))
        ));
    }
}

#[test]
fn runtime_config_swap_revalidates() {
    let now = NaiveDate::from_ymd_opt(2026, 10, 18)
        .expect("date")
        .and_hms_opt(12, 0, 0)
        .expect("time");
    let mut engine =
        TimelineEngine::new(NullRenderer::default(), TimelineEngineConfig::new(viewport()), now)
            .expect("engine init");

    let slower = engine.config().with_scroll_to_now_duration_ms(1_200.0);
    engine.set_config(slower).expect("valid config");
    assert_eq!(engine.config().scroll_to_now_duration_ms, 1_200.0);

    let broken = engine.config().with_touch_slop_px(-1.0);
    assert!(engine.set_config(broken).is_err());
    assert_eq!(engine.config(), slower);

    assert!(engine.set_viewport(ViewportSize::new(800.0, 600.0)).is_ok());
    assert!(engine.set_viewport(ViewportSize::new(800.0, -1.0)).is_err());
    assert_eq!(engine.viewport(), ViewportSize::new(800.0, 600.0));
}
