use crate::core::{Timestamp, ViewportSize, ViewportState, format_period_label, units_to_time};
use crate::render::{NowIndicator, RenderFrame, UnitRow};

pub(super) fn build_render_frame(
    viewport: ViewportSize,
    state: ViewportState,
    reference_now: Timestamp,
) -> RenderFrame {
    let (first, last) = state.visible_unit_range(viewport.height);
    let mut frame = RenderFrame::new(viewport, state);

    // `last` is the ceil of the bottom edge, so it starts below the viewport.
    for index in first..last {
        let start = units_to_time(state.active_level, index as f64, reference_now);
        frame = frame.with_row(UnitRow {
            index,
            y: state.pixel_for_units(index as f64),
            height: state.unit_height,
            start,
            label: format_period_label(state.active_level, start),
        });
    }

    let now_y = state.pixel_for_time(reference_now, reference_now);
    if (0.0..=viewport.height).contains(&now_y) {
        frame = frame.with_now_indicator(NowIndicator {
            y: now_y,
            time: reference_now,
        });
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::build_render_frame;
    use crate::core::{ScaleLevel, ViewportSize, ViewportState};
    use chrono::NaiveDate;

    #[test]
    fn rows_cover_viewport_and_label_periods() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .expect("date")
            .and_hms_opt(3, 30, 0)
            .expect("time");
        let state = ViewportState {
            active_level: ScaleLevel::Hour,
            unit_height: 60.0,
            scroll_offset: -30.0,
        };
        let frame = build_render_frame(ViewportSize::new(200.0, 300.0), state, now);

        assert_eq!(frame.rows.first().map(|row| row.index), Some(-1));
        assert_eq!(frame.rows.last().map(|row| row.index), Some(4));
        assert_eq!(frame.rows[1].label, "00:00");
        assert_eq!(frame.rows[1].y, 30.0);
        // 03:30 is unit 3.5 -> 3.5 * 60 + 30.
        assert_eq!(frame.now_indicator.map(|indicator| indicator.y), Some(240.0));
        assert!(frame.validate().is_ok());
    }
}
