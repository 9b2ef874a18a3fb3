use serde::{Deserialize, Serialize};

use crate::core::{ScaleLevel, ViewportSize};
use crate::error::TimelineResult;
use crate::interaction::{GestureConfig, MomentumConfig};

use super::validation::validate_engine_config;

/// Public engine bootstrap configuration.
///
/// Every tuning value has a serde default, so a persisted config only needs
/// the viewport and whatever it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: ViewportSize,
    /// Smallest height of one unit before zooming out switches to the
    /// coarser level.
    #[serde(default = "default_min_unit_height")]
    pub min_unit_height: f64,
    #[serde(default = "default_initial_level")]
    pub initial_level: ScaleLevel,
    #[serde(default = "default_initial_unit_height")]
    pub initial_unit_height: f64,
    #[serde(default = "default_touch_slop_px")]
    pub touch_slop_px: f64,
    #[serde(default = "default_velocity_gate_px_per_sec")]
    pub velocity_gate_px_per_sec: f64,
    #[serde(default = "default_drag_sensitivity")]
    pub drag_sensitivity: f64,
    #[serde(default = "default_velocity_boost")]
    pub velocity_boost: f64,
    #[serde(default = "default_velocity_window_ms")]
    pub velocity_window_ms: i64,
    #[serde(default = "default_friction_multiplier")]
    pub friction_multiplier: f64,
    #[serde(default = "default_fling_stop_velocity")]
    pub fling_stop_velocity: f64,
    #[serde(default = "default_max_level_switch_iterations")]
    pub max_level_switch_iterations: u32,
    #[serde(default = "default_scroll_to_now_duration_ms")]
    pub scroll_to_now_duration_ms: f64,
    /// Fraction of the viewport height, from the top, where scroll-to-now
    /// and date selection place their target instant.
    #[serde(default = "default_now_anchor_ratio")]
    pub now_anchor_ratio: f64,
}

impl TimelineEngineConfig {
    /// Creates a config with default tuning.
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            min_unit_height: default_min_unit_height(),
            initial_level: default_initial_level(),
            initial_unit_height: default_initial_unit_height(),
            touch_slop_px: default_touch_slop_px(),
            velocity_gate_px_per_sec: default_velocity_gate_px_per_sec(),
            drag_sensitivity: default_drag_sensitivity(),
            velocity_boost: default_velocity_boost(),
            velocity_window_ms: default_velocity_window_ms(),
            friction_multiplier: default_friction_multiplier(),
            fling_stop_velocity: default_fling_stop_velocity(),
            max_level_switch_iterations: default_max_level_switch_iterations(),
            scroll_to_now_duration_ms: default_scroll_to_now_duration_ms(),
            now_anchor_ratio: default_now_anchor_ratio(),
        }
    }

    /// Sets the level and unit height shown on startup.
    #[must_use]
    pub fn with_initial_level(mut self, level: ScaleLevel, unit_height: f64) -> Self {
        self.initial_level = level;
        self.initial_unit_height = unit_height;
        self
    }

    #[must_use]
    pub fn with_min_unit_height(mut self, min_unit_height: f64) -> Self {
        self.min_unit_height = min_unit_height;
        self
    }

    #[must_use]
    pub fn with_touch_slop_px(mut self, touch_slop_px: f64) -> Self {
        self.touch_slop_px = touch_slop_px;
        self
    }

    #[must_use]
    pub fn with_velocity_gate(mut self, px_per_sec: f64) -> Self {
        self.velocity_gate_px_per_sec = px_per_sec;
        self
    }

    /// Sets drag sensitivity and release velocity boost together.
    #[must_use]
    pub fn with_drag_response(mut self, sensitivity: f64, velocity_boost: f64) -> Self {
        self.drag_sensitivity = sensitivity;
        self.velocity_boost = velocity_boost;
        self
    }

    #[must_use]
    pub fn with_friction_multiplier(mut self, friction_multiplier: f64) -> Self {
        self.friction_multiplier = friction_multiplier;
        self
    }

    #[must_use]
    pub fn with_scroll_to_now_duration_ms(mut self, duration_ms: f64) -> Self {
        self.scroll_to_now_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_now_anchor_ratio(mut self, ratio: f64) -> Self {
        self.now_anchor_ratio = ratio;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        validate_engine_config(self)
    }

    #[must_use]
    pub fn gesture_config(self) -> GestureConfig {
        GestureConfig {
            touch_slop_px: self.touch_slop_px,
            velocity_gate_px_per_sec: self.velocity_gate_px_per_sec,
            drag_sensitivity: self.drag_sensitivity,
            velocity_boost: self.velocity_boost,
            velocity_window_ms: self.velocity_window_ms,
        }
    }

    #[must_use]
    pub fn momentum_config(self) -> MomentumConfig {
        MomentumConfig {
            friction_multiplier: self.friction_multiplier,
            stop_velocity_abs: self.fling_stop_velocity,
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// Deserializes config from JSON. Values are not validated here;
    /// `TimelineEngine::new` does that.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

fn default_min_unit_height() -> f64 {
    60.0
}

fn default_initial_level() -> ScaleLevel {
    ScaleLevel::Hour
}

fn default_initial_unit_height() -> f64 {
    60.0
}

fn default_touch_slop_px() -> f64 {
    8.0
}

fn default_velocity_gate_px_per_sec() -> f64 {
    300.0
}

fn default_drag_sensitivity() -> f64 {
    0.5
}

fn default_velocity_boost() -> f64 {
    1.0
}

fn default_velocity_window_ms() -> i64 {
    100
}

fn default_friction_multiplier() -> f64 {
    0.9
}

fn default_fling_stop_velocity() -> f64 {
    1.0
}

fn default_max_level_switch_iterations() -> u32 {
    100
}

fn default_scroll_to_now_duration_ms() -> f64 {
    600.0
}

fn default_now_anchor_ratio() -> f64 {
    0.2
}
