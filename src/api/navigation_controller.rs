use tracing::debug;

use crate::core::calendar::start_of_day;
use crate::core::{Timestamp, format_focus_label, time_to_units};
use crate::extensions::TimelineEvent;
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Absolute time displayed at row `y`.
    #[must_use]
    pub fn time_at_pixel(&self, y: f64) -> Timestamp {
        self.state.time_at_pixel(y, self.reference_now)
    }

    /// Row at which `time` is displayed; may lie outside the viewport.
    #[must_use]
    pub fn pixel_for_time(&self, time: Timestamp) -> f64 {
        self.state.pixel_for_time(time, self.reference_now)
    }

    /// Row of the reference instant, or `None` when it is off screen.
    #[must_use]
    pub fn now_indicator_pixel(&self) -> Option<f64> {
        let y = self.pixel_for_time(self.reference_now);
        (0.0..=self.viewport.height).contains(&y).then_some(y)
    }

    /// Whole unit indices of the active level intersecting
    /// `[0, viewport_height]`.
    #[must_use]
    pub fn visible_unit_range(&self, viewport_height: f64) -> (i64, i64) {
        self.state.visible_unit_range(viewport_height)
    }

    /// Text for the instant at row `y` at the precision of the active level.
    #[must_use]
    pub fn focus_label_at(&self, y: f64) -> String {
        format_focus_label(self.state.active_level, self.time_at_pixel(y))
    }

    pub(super) fn now_units(&self) -> f64 {
        time_to_units(self.state.active_level, self.reference_now, self.reference_now)
    }

    /// Moves unit origins to `now` while keeping the top row on the same
    /// instant, so nothing visibly moves.
    pub fn set_reference_now(&mut self, now: Timestamp) {
        if now == self.reference_now {
            return;
        }
        let top_time = self.time_at_pixel(0.0);
        self.reference_now = now;
        let offset = self
            .state
            .scroll_offset_placing(time_to_units(self.state.active_level, top_time, now), 0.0);
        if offset != self.state.scroll_offset {
            self.scroll_animation.shift_by(offset - self.state.scroll_offset);
            self.state.scroll_offset = offset;
            self.emit_scroll_changed();
        }
    }

    /// Accepts a date picked outside the timeline and jumps so the start of
    /// that day sits at the now-anchor row. Running animations are cancelled.
    pub fn on_date_selected(&mut self, selected: Timestamp) {
        let date = selected.date();
        self.cancel_animations();
        self.selected_date = Some(date);

        let anchor_y = self.viewport.height * self.config.now_anchor_ratio;
        let day_units = time_to_units(
            self.state.active_level,
            start_of_day(selected),
            self.reference_now,
        );
        let offset = self.state.scroll_offset_placing(day_units, anchor_y);
        debug!(%date, scroll_offset = offset, "date selected");
        self.emit_event(TimelineEvent::DateSelected { date });
        if offset != self.state.scroll_offset {
            self.state.scroll_offset = offset;
            self.emit_scroll_changed();
        }
    }
}
