use serde::{Deserialize, Serialize};

use crate::core::{ScaleLevel, Timestamp, ViewportState, time_to_units, units_to_time};

/// Bounds applied while turning a continuous zoom factor into a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_unit_height: f64,
    pub max_iterations: u32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_unit_height: 60.0,
            max_iterations: 100,
        }
    }
}

/// Level and unit height after one zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomResolution {
    pub level: ScaleLevel,
    pub unit_height: f64,
    pub iterations: u32,
    /// The iteration cap stopped the loop before it settled.
    pub capped: bool,
}

/// Resolves the level and unit height for `unit_height * factor`.
///
/// Zooming in may cascade through several finer levels in one call; zooming
/// out moves at most one level and lands in the middle of that level's band.
/// Callers must pass a finite, positive `factor`.
#[must_use]
pub fn resolve_zoom_target(
    level: ScaleLevel,
    unit_height: f64,
    factor: f64,
    limits: ZoomLimits,
) -> ZoomResolution {
    let min = limits.min_unit_height;
    let mut level = level;
    let mut height = unit_height * factor;
    let mut iterations = 0;

    loop {
        if iterations >= limits.max_iterations {
            return ZoomResolution {
                level,
                unit_height: height,
                iterations,
                capped: true,
            };
        }
        iterations += 1;

        let finer = level.finer();
        let finer_threshold = finer.map_or(min, |finer| min * finer.ratio_to_next());

        if height >= finer_threshold {
            match finer {
                Some(finer) => {
                    height /= finer.ratio_to_next();
                    level = finer;
                }
                None => {
                    height = finer_threshold;
                    break;
                }
            }
        } else if height < min {
            if let Some(coarser) = level.coarser() {
                // The band of `coarser` is [min, min * level.ratio_to_next()).
                height = (min + min * level.ratio_to_next()) / 2.0;
                level = coarser;
            } else {
                height = min;
            }
            break;
        } else {
            break;
        }
    }

    ZoomResolution {
        level,
        unit_height: height,
        iterations,
        capped: false,
    }
}

/// Applies `resolution` so the instant under row `focal_y` stays there.
#[must_use]
pub fn anchor_zoom_resolution(
    state: ViewportState,
    resolution: ZoomResolution,
    focal_y: f64,
    reference_now: Timestamp,
) -> ViewportState {
    let old_units = state.units_at_pixel(focal_y);
    let new_units = if resolution.level == state.active_level {
        old_units
    } else {
        let focus_time = units_to_time(state.active_level, old_units, reference_now);
        time_to_units(resolution.level, focus_time, reference_now)
    };

    ViewportState {
        active_level: resolution.level,
        unit_height: resolution.unit_height,
        scroll_offset: new_units * resolution.unit_height - focal_y,
    }
}
