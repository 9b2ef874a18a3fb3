use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Timestamp, ViewportSize, ViewportState};
use crate::error::TimelineResult;
use crate::interaction::{GesturePhase, MomentumState};
use crate::render::Renderer;

use super::TimelineEngine;

/// Serializable state snapshot used by regression tests and debugging
/// tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub viewport: ViewportSize,
    pub state: ViewportState,
    pub reference_now: Timestamp,
    pub selected_date: Option<NaiveDate>,
    /// Instant at the vertical centre of the viewport.
    pub center_time: Timestamp,
    pub center_label: String,
    pub visible_unit_range: (i64, i64),
    pub gesture_phase: GesturePhase,
    pub momentum: MomentumState,
    pub scroll_to_now_target: Option<f64>,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        let center_y = self.viewport.height / 2.0;
        TimelineSnapshot {
            viewport: self.viewport,
            state: self.state,
            reference_now: self.reference_now,
            selected_date: self.selected_date,
            center_time: self.time_at_pixel(center_y),
            center_label: self.focus_label_at(center_y),
            visible_unit_range: self.visible_unit_range(self.viewport.height),
            gesture_phase: self.gestures.phase(),
            momentum: self.momentum.state(),
            scroll_to_now_target: self.scroll_animation.target(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
