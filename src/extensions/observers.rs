use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{ScaleLevel, Timestamp, ViewportSize, ViewportState};
use crate::interaction::{GesturePhase, MomentumState};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub viewport: ViewportSize,
    pub state: ViewportState,
    pub reference_now: Timestamp,
    pub selected_date: Option<NaiveDate>,
    pub gesture_phase: GesturePhase,
    pub momentum: MomentumState,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimelineEvent {
    LevelChanged {
        from: ScaleLevel,
        to: ScaleLevel,
        unit_height: f64,
    },
    ScrollChanged {
        scroll_offset: f64,
    },
    FlingStarted {
        initial_velocity: f64,
    },
    FlingEnded {
        cancelled: bool,
    },
    Tap {
        x: f64,
        y: f64,
        time: Timestamp,
    },
    ScrollToNowStarted {
        target_offset: f64,
    },
    ScrollToNowEnded {
        cancelled: bool,
    },
    DateSelected {
        date: NaiveDate,
    },
    Rendered,
}

/// Hook interface for host code that reacts to timeline changes
/// (haptics on level switch, date header updates, analytics).
pub trait TimelineObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TimelineEvent, context: ObserverContext);
}
