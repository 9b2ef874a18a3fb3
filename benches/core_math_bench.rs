use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig, ZoomLimits, resolve_zoom_target};
use timeline_rs::core::{ScaleLevel, Timestamp, ViewportSize, time_to_units, units_to_time};
use timeline_rs::interaction::PointerEvent;
use timeline_rs::render::NullRenderer;

fn reference_now() -> Timestamp {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .expect("date")
        .and_hms_opt(14, 37, 12)
        .expect("time")
}

fn bench_converter_round_trip(c: &mut Criterion) {
    let now = reference_now();
    let sample = NaiveDate::from_ymd_opt(1987, 6, 5)
        .expect("date")
        .and_hms_opt(4, 3, 2)
        .expect("time");

    c.bench_function("converter_round_trip_all_levels", |b| {
        b.iter(|| {
            for level in ScaleLevel::ALL {
                let units = time_to_units(level, black_box(sample), now);
                let _ = units_to_time(level, black_box(units), now);
            }
        })
    });
}

fn bench_zoom_cascade(c: &mut Criterion) {
    let limits = ZoomLimits::default();

    c.bench_function("zoom_resolution_century_to_minute", |b| {
        b.iter(|| {
            let _ = resolve_zoom_target(
                ScaleLevel::Century,
                black_box(60.0),
                black_box(1e9),
                limits,
            );
        })
    });
}

fn bench_pinch_session(c: &mut Criterion) {
    let config = TimelineEngineConfig::new(ViewportSize::new(390.0, 844.0));

    c.bench_function("pinch_session_120_frames", |b| {
        b.iter(|| {
            let mut engine = TimelineEngine::new(NullRenderer::default(), config, reference_now())
                .expect("engine init");
            engine.apply_pointer_event(PointerEvent::down(1, 195.0, 400.0, 0));
            engine.apply_pointer_event(PointerEvent::down(2, 195.0, 440.0, 1));
            for frame in 1..=120_i64 {
                let spread = 20.0 + frame as f64 * 2.0;
                engine.apply_pointer_event(PointerEvent::moved(
                    2,
                    195.0,
                    420.0 + spread,
                    frame * 16,
                ));
            }
            black_box(engine.viewport_state())
        })
    });
}

criterion_group!(
    benches,
    bench_converter_round_trip,
    bench_zoom_cascade,
    bench_pinch_session
);
criterion_main!(benches);
