use serde::{Deserialize, Serialize};

use crate::core::calendar::Timestamp;
use crate::core::scale_level::ScaleLevel;
use crate::core::time_converter::{time_to_units, units_to_time};

/// Pixel size of the timeline surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Shared mapping between screen rows and unit indices.
///
/// Row `y` (pixels from the top of the viewport) shows unit
/// `(scroll_offset + y) / unit_height` of `active_level`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub active_level: ScaleLevel,
    /// Pixels per unit of `active_level`; always > 0.
    pub unit_height: f64,
    /// Pixels; unbounded in both directions.
    pub scroll_offset: f64,
}

impl ViewportState {
    #[must_use]
    pub fn new(active_level: ScaleLevel, unit_height: f64) -> Self {
        Self {
            active_level,
            unit_height,
            scroll_offset: 0.0,
        }
    }

    #[must_use]
    pub fn units_at_pixel(self, y: f64) -> f64 {
        (self.scroll_offset + y) / self.unit_height
    }

    #[must_use]
    pub fn pixel_for_units(self, units: f64) -> f64 {
        units * self.unit_height - self.scroll_offset
    }

    /// Absolute time displayed at row `y`.
    #[must_use]
    pub fn time_at_pixel(self, y: f64, reference_now: Timestamp) -> Timestamp {
        units_to_time(self.active_level, self.units_at_pixel(y), reference_now)
    }

    /// Row at which `time` is displayed (may be outside the viewport).
    #[must_use]
    pub fn pixel_for_time(self, time: Timestamp, reference_now: Timestamp) -> f64 {
        self.pixel_for_units(time_to_units(self.active_level, time, reference_now))
    }

    /// Scroll offset that shows `units` at row `y`.
    #[must_use]
    pub fn scroll_offset_placing(self, units: f64, y: f64) -> f64 {
        units * self.unit_height - y
    }

    /// Whole unit indices intersecting `[0, viewport_height]`, inclusive.
    #[must_use]
    pub fn visible_unit_range(self, viewport_height: f64) -> (i64, i64) {
        let first = self.units_at_pixel(0.0).floor();
        let last = self.units_at_pixel(viewport_height.max(0.0)).ceil();
        // `as` saturates for extreme offsets.
        (first as i64, last as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportSize, ViewportState};
    use crate::core::ScaleLevel;

    #[test]
    fn pixel_and_unit_mapping_invert() {
        let state = ViewportState {
            active_level: ScaleLevel::Hour,
            unit_height: 60.0,
            scroll_offset: -90.0,
        };
        assert_eq!(state.units_at_pixel(300.0), 3.5);
        assert_eq!(state.pixel_for_units(3.5), 300.0);
        assert_eq!(state.scroll_offset_placing(3.5, 300.0), -90.0);
    }

    #[test]
    fn visible_range_covers_partial_units() {
        let state = ViewportState {
            active_level: ScaleLevel::Day,
            unit_height: 100.0,
            scroll_offset: -150.0,
        };
        assert_eq!(state.visible_unit_range(400.0), (-2, 3));
    }

    #[test]
    fn viewport_size_validation() {
        assert!(ViewportSize::new(320.0, 640.0).is_valid());
        assert!(!ViewportSize::new(0.0, 640.0).is_valid());
        assert!(!ViewportSize::new(320.0, f64::NAN).is_valid());
    }
}
