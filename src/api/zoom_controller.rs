use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{ViewportState, format_focus_label};
use crate::extensions::TimelineEvent;
use crate::render::Renderer;

use super::TimelineEngine;
use super::zoom_target_resolver::{
    ZoomLimits, ZoomResolution, anchor_zoom_resolution, resolve_zoom_target,
};

/// Viewport before and after one zoom call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomOutcome {
    pub previous: ViewportState,
    pub current: ViewportState,
    /// `None` when the call was a no-op (factor of one or invalid input).
    pub resolution: Option<ZoomResolution>,
}

impl ZoomOutcome {
    fn unchanged(state: ViewportState) -> Self {
        Self {
            previous: state,
            current: state,
            resolution: None,
        }
    }

    #[must_use]
    pub fn level_changed(&self) -> bool {
        self.previous.active_level != self.current.active_level
    }
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min_unit_height: self.config.min_unit_height,
            max_iterations: self.config.max_level_switch_iterations,
        }
    }

    /// Rescales by `factor` keeping the instant under row `focal_y` fixed.
    ///
    /// Non-finite or non-positive factors are treated as `1.0`.
    pub fn zoom(&mut self, factor: f64, focal_y: f64) -> ZoomOutcome {
        let previous = self.state;
        if !focal_y.is_finite() {
            warn!(focal_y, "ignoring zoom with non-finite focal point");
            return ZoomOutcome::unchanged(previous);
        }
        if !factor.is_finite() || factor <= 0.0 || factor == 1.0 {
            trace!(factor, "zoom factor treated as identity");
            return ZoomOutcome::unchanged(previous);
        }

        let resolution = resolve_zoom_target(
            previous.active_level,
            previous.unit_height,
            factor,
            self.zoom_limits(),
        );
        if resolution.capped {
            warn!(
                iterations = resolution.iterations,
                level = %resolution.level,
                unit_height = resolution.unit_height,
                "level switch cascade hit iteration cap"
            );
        }

        let current = anchor_zoom_resolution(previous, resolution, focal_y, self.reference_now);
        if current == previous {
            return ZoomOutcome::unchanged(previous);
        }
        self.state = current;

        if current.active_level != previous.active_level {
            let focus_time = current.time_at_pixel(focal_y, self.reference_now);
            debug!(
                from = %previous.active_level,
                to = %current.active_level,
                old_height = previous.unit_height,
                new_height = current.unit_height,
                scroll_offset = current.scroll_offset,
                focus = %format_focus_label(current.active_level, focus_time),
                "scale level switched"
            );
            self.emit_event(TimelineEvent::LevelChanged {
                from: previous.active_level,
                to: current.active_level,
                unit_height: current.unit_height,
            });
        } else {
            trace!(
                factor,
                unit_height = current.unit_height,
                scroll_offset = current.scroll_offset,
                "rescaled within level"
            );
        }
        if current.scroll_offset != previous.scroll_offset {
            self.emit_scroll_changed();
        }

        ZoomOutcome {
            previous,
            current,
            resolution: Some(resolution),
        }
    }

    /// Adds `delta_px` to the scroll offset (positive moves content up).
    ///
    /// Returns `false` for zero or non-finite deltas.
    pub fn pan(&mut self, delta_px: f64) -> bool {
        if !delta_px.is_finite() || delta_px == 0.0 {
            return false;
        }
        self.state.scroll_offset += delta_px;
        self.emit_scroll_changed();
        true
    }
}
