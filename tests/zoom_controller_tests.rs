use approx::assert_relative_eq;
use chrono::NaiveDate;
use proptest::prelude::*;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{ScaleLevel, Timestamp, ViewportSize};
use timeline_rs::render::NullRenderer;

fn reference_now() -> Timestamp {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .expect("date")
        .and_hms_opt(14, 37, 12)
        .expect("time")
}

fn engine_at(level: ScaleLevel, unit_height: f64) -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(ViewportSize::new(400.0, 800.0))
        .with_initial_level(level, unit_height);
    TimelineEngine::new(NullRenderer::default(), config, reference_now()).expect("engine init")
}

fn drift_millis(a: Timestamp, b: Timestamp) -> i64 {
    (a - b).num_milliseconds().abs()
}

#[test]
fn hour_pinch_crosses_into_half_hour() {
    let mut engine = engine_at(ScaleLevel::Hour, 60.0);
    let before = engine.time_at_pixel(300.0);

    let outcome = engine.zoom(2.1, 300.0);

    assert!(outcome.level_changed());
    let state = engine.viewport_state();
    assert_eq!(state.active_level, ScaleLevel::HalfHour);
    assert_relative_eq!(state.unit_height, 63.0, epsilon = 1e-9);
    // 05:00 is half-hour unit 10.
    assert_relative_eq!(state.scroll_offset, 10.0 * 63.0 - 300.0, epsilon = 1e-6);
    assert!(drift_millis(engine.time_at_pixel(300.0), before) <= 1_000);
}

#[test]
fn century_zoom_out_clamps_height() {
    let mut engine = engine_at(ScaleLevel::Century, 60.0);
    engine.zoom(0.5, 400.0);
    let state = engine.viewport_state();
    assert_eq!(state.active_level, ScaleLevel::Century);
    assert_eq!(state.unit_height, 60.0);
}

#[test]
fn minute_zoom_in_clamps_height() {
    let mut engine = engine_at(ScaleLevel::Minute, 60.0);
    let outcome = engine.zoom(4.0, 100.0);
    assert_eq!(outcome.current.active_level, ScaleLevel::Minute);
    assert_eq!(outcome.current.unit_height, 60.0);
    assert_eq!(outcome.current, outcome.previous);
}

#[test]
fn degenerate_factors_are_identity() {
    let mut engine = engine_at(ScaleLevel::Day, 90.0);
    let before = engine.viewport_state();
    for factor in [0.0, -2.0, f64::NAN, f64::INFINITY, 1.0] {
        let outcome = engine.zoom(factor, 200.0);
        assert!(outcome.resolution.is_none());
    }
    assert_eq!(engine.viewport_state(), before);
}

#[test]
fn zoom_out_from_day_lands_mid_week_band() {
    let mut engine = engine_at(ScaleLevel::Day, 60.0);
    let before = engine.time_at_pixel(500.0);
    engine.zoom(0.9, 500.0);
    let state = engine.viewport_state();
    assert_eq!(state.active_level, ScaleLevel::Week);
    // Week band is [60, 60 * 7).
    assert_relative_eq!(state.unit_height, 240.0);
    assert!(drift_millis(engine.time_at_pixel(500.0), before) <= 1_000);
}

fn factor_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.05f64..0.95, 1.05f64..40.0]
}

proptest! {
    #[test]
    fn focal_time_survives_any_zoom_sequence(
        start_level in 0usize..ScaleLevel::ALL.len(),
        steps in proptest::collection::vec((factor_strategy(), 0.0f64..800.0), 1..25),
    ) {
        let mut engine = engine_at(ScaleLevel::ALL[start_level], 120.0);
        for (factor, focal_y) in steps {
            let before = engine.time_at_pixel(focal_y);
            engine.zoom(factor, focal_y);
            let after = engine.time_at_pixel(focal_y);
            prop_assert!(
                drift_millis(after, before) <= 1_000,
                "drift at y={focal_y} factor={factor}: {before} -> {after}"
            );
            let state = engine.viewport_state();
            prop_assert!(state.unit_height >= 60.0);
            prop_assert!(state.scroll_offset.is_finite());
        }
    }
}
