use chrono::NaiveDate;

use crate::core::{Timestamp, ViewportSize, ViewportState};
use crate::error::TimelineResult;
use crate::extensions::{TimelineEvent, TimelineObserver};
use crate::interaction::{GestureClassifier, MomentumEngine, ScrollToNowAnimation};
use crate::render::Renderer;

use super::{TimelineEngineConfig, render_frame_builder::build_render_frame};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the single `ViewportState` and is the only place it
/// is mutated. Pointer input, animation frames and programmatic navigation
/// all funnel through it in arrival order; the renderer only ever sees a
/// frame built from a snapshot.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TimelineEngineConfig,
    pub(super) viewport: ViewportSize,
    pub(super) state: ViewportState,
    pub(super) reference_now: Timestamp,
    pub(super) selected_date: Option<NaiveDate>,
    pub(super) gestures: GestureClassifier,
    pub(super) momentum: MomentumEngine,
    pub(super) scroll_animation: ScrollToNowAnimation,
    pub(super) observers: Vec<Box<dyn TimelineObserver>>,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn config(&self) -> TimelineEngineConfig {
        self.config
    }

    /// Read-only copy of the viewport state for this frame.
    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportSize) -> TimelineResult<()> {
        self.config = TimelineEngineConfig {
            viewport,
            ..self.config
        }
        .validate()?;
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn reference_now(&self) -> Timestamp {
        self.reference_now
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Builds a frame from the current snapshot and hands it to the renderer.
    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = build_render_frame(self.viewport, self.state, self.reference_now);
        self.renderer.render(&frame)?;
        self.emit_event(TimelineEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
