use crate::error::{TimelineError, TimelineResult};

use super::TimelineEngineConfig;

fn require_positive(name: &str, value: f64) -> TimelineResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TimelineError::InvalidConfig(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> TimelineResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TimelineError::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

pub(super) fn validate_engine_config(
    config: TimelineEngineConfig,
) -> TimelineResult<TimelineEngineConfig> {
    if !config.viewport.is_valid() {
        return Err(TimelineError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    require_positive("min_unit_height", config.min_unit_height)?;
    require_positive("initial_unit_height", config.initial_unit_height)?;
    if config.initial_unit_height < config.min_unit_height {
        return Err(TimelineError::InvalidConfig(format!(
            "initial_unit_height ({}) must be >= min_unit_height ({})",
            config.initial_unit_height, config.min_unit_height
        )));
    }

    require_non_negative("touch_slop_px", config.touch_slop_px)?;
    require_non_negative("velocity_gate_px_per_sec", config.velocity_gate_px_per_sec)?;
    require_positive("drag_sensitivity", config.drag_sensitivity)?;
    require_positive("velocity_boost", config.velocity_boost)?;
    if config.velocity_window_ms <= 0 {
        return Err(TimelineError::InvalidConfig(
            "velocity_window_ms must be > 0".to_owned(),
        ));
    }

    require_positive("friction_multiplier", config.friction_multiplier)?;
    require_positive("fling_stop_velocity", config.fling_stop_velocity)?;
    if config.max_level_switch_iterations == 0 {
        return Err(TimelineError::InvalidConfig(
            "max_level_switch_iterations must be >= 1".to_owned(),
        ));
    }

    require_non_negative("scroll_to_now_duration_ms", config.scroll_to_now_duration_ms)?;
    if !config.now_anchor_ratio.is_finite() || !(0.0..=1.0).contains(&config.now_anchor_ratio) {
        return Err(TimelineError::InvalidConfig(
            "now_anchor_ratio must be finite and in [0, 1]".to_owned(),
        ));
    }

    Ok(config)
}

pub(super) fn validate_viewport_height(viewport_height: f64) -> TimelineResult<f64> {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return Err(TimelineError::InvalidInput(format!(
            "viewport height must be finite and > 0, got {viewport_height}"
        )));
    }
    Ok(viewport_height)
}
