use serde::{Deserialize, Serialize};

use crate::core::{ScaleLevel, Timestamp, ViewportSize, ViewportState};
use crate::error::{TimelineError, TimelineResult};

/// One visible unit of the active level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRow {
    pub index: i64,
    /// Top edge in viewport pixels; may be negative for the first row.
    pub y: f64,
    pub height: f64,
    pub start: Timestamp,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NowIndicator {
    pub y: f64,
    pub time: Timestamp,
}

/// Backend-agnostic scene for one timeline draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: ViewportSize,
    pub state: ViewportState,
    pub rows: Vec<UnitRow>,
    /// Present only when the reference instant is on screen.
    pub now_indicator: Option<NowIndicator>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: ViewportSize, state: ViewportState) -> Self {
        Self {
            viewport,
            state,
            rows: Vec::new(),
            now_indicator: None,
        }
    }

    #[must_use]
    pub fn with_row(mut self, row: UnitRow) -> Self {
        self.rows.push(row);
        self
    }

    #[must_use]
    pub fn with_now_indicator(mut self, indicator: NowIndicator) -> Self {
        self.now_indicator = Some(indicator);
        self
    }

    #[must_use]
    pub fn level(&self) -> ScaleLevel {
        self.state.active_level
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.state.unit_height.is_finite() || self.state.unit_height <= 0.0 {
            return Err(TimelineError::InvalidInput(format!(
                "unit height must be finite and > 0, got {}",
                self.state.unit_height
            )));
        }
        if !self.state.scroll_offset.is_finite() {
            return Err(TimelineError::InvalidInput(
                "scroll offset must be finite".to_owned(),
            ));
        }
        for row in &self.rows {
            if !row.y.is_finite() || !row.height.is_finite() || row.height <= 0.0 {
                return Err(TimelineError::InvalidInput(format!(
                    "row {} has invalid geometry (y={}, height={})",
                    row.index, row.y, row.height
                )));
            }
        }
        if let Some(indicator) = self.now_indicator {
            if !indicator.y.is_finite() {
                return Err(TimelineError::InvalidInput(
                    "now indicator position must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
