use chrono::NaiveDate;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig, TimelineSnapshot};
use timeline_rs::core::{ScaleLevel, Timestamp, ViewportSize};
use timeline_rs::interaction::{GesturePhase, PointerEvent};
use timeline_rs::render::NullRenderer;

fn reference_now() -> Timestamp {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .expect("date")
        .and_hms_opt(6, 45, 0)
        .expect("time")
}

fn engine() -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(ViewportSize::new(400.0, 600.0));
    TimelineEngine::new(NullRenderer::default(), config, reference_now()).expect("engine init")
}

#[test]
fn snapshot_describes_current_view() {
    let mut engine = engine();
    engine.apply_pointer_event(PointerEvent::down(1, 10.0, 10.0, 0));

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.state.active_level, ScaleLevel::Hour);
    assert_eq!(snapshot.visible_unit_range, (0, 10));
    assert_eq!(snapshot.center_label, "05:00:00");
    assert_eq!(snapshot.gesture_phase, GesturePhase::TrackingUnclassified);
    assert!(!snapshot.momentum.active);
    assert_eq!(snapshot.scroll_to_now_target, None);
    assert_eq!(snapshot.selected_date, None);
}

#[test]
fn snapshot_json_round_trips() {
    let mut engine = engine();
    engine.zoom(3.0, 300.0);
    engine.on_date_selected(reference_now());

    let json = engine.snapshot_json_pretty().expect("serialize snapshot");
    let parsed: TimelineSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed, engine.snapshot());
    assert!(json.contains("\"active_level\": \"half_hour\""));
}

#[test]
fn render_passes_visible_rows_to_renderer() {
    let mut engine = engine();
    engine.render().expect("render");
    engine.pan(-30.0);
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    // Half a row above plus ten rows of 60 px.
    assert_eq!(renderer.last_row_count, 11);
    // 06:45 at unit 6.75 shifted down by 30 px.
    assert_eq!(renderer.last_now_indicator_y, Some(435.0));
}
