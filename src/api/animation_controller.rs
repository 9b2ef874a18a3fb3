use tracing::{debug, trace};

use crate::core::Timestamp;
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::TimelineEvent;
use crate::interaction::{MomentumState, MomentumStep, ScrollAnimationStep};
use crate::render::Renderer;

use super::TimelineEngine;
use super::validation::validate_viewport_height;

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.momentum.is_active() || self.scroll_animation.is_active()
    }

    #[must_use]
    pub fn momentum_state(&self) -> MomentumState {
        self.momentum.state()
    }

    #[must_use]
    pub fn is_scrolling_to_now(&self) -> bool {
        self.scroll_animation.is_active()
    }

    /// Advances running animations by one frame of `frame_time_ms`.
    ///
    /// Pending cancellations are observed before any delta is committed.
    /// Returns `true` when the scroll offset changed.
    pub fn step_frame(&mut self, frame_time_ms: f64) -> TimelineResult<bool> {
        if !frame_time_ms.is_finite() || frame_time_ms < 0.0 {
            return Err(TimelineError::InvalidInput(format!(
                "frame time must be finite and >= 0, got {frame_time_ms}"
            )));
        }

        let mut changed = false;
        match self.momentum.step(frame_time_ms) {
            MomentumStep::Idle => {}
            MomentumStep::Cancelled => {
                debug!(
                    scroll_offset = self.state.scroll_offset,
                    "fling cancelled"
                );
                self.emit_event(TimelineEvent::FlingEnded { cancelled: true });
            }
            MomentumStep::Moved { delta, finished } => {
                trace!(delta, finished, "fling step");
                changed |= self.pan(delta);
                if finished {
                    debug!(scroll_offset = self.state.scroll_offset, "fling finished");
                    self.emit_event(TimelineEvent::FlingEnded { cancelled: false });
                }
            }
        }

        match self.scroll_animation.step(frame_time_ms) {
            ScrollAnimationStep::Idle => {}
            ScrollAnimationStep::Cancelled => {
                debug!(
                    scroll_offset = self.state.scroll_offset,
                    "scroll-to-now cancelled"
                );
                self.emit_event(TimelineEvent::ScrollToNowEnded { cancelled: true });
            }
            ScrollAnimationStep::Moved { offset, finished } => {
                trace!(offset, finished, "scroll-to-now step");
                if offset != self.state.scroll_offset {
                    self.state.scroll_offset = offset;
                    self.emit_scroll_changed();
                    changed = true;
                }
                if finished {
                    debug!(scroll_offset = offset, "scroll-to-now finished");
                    self.emit_event(TimelineEvent::ScrollToNowEnded { cancelled: false });
                }
            }
        }

        Ok(changed)
    }

    /// Starts an eased scroll that brings `now` to
    /// `viewport_height * now_anchor_ratio` from the top.
    ///
    /// `now` becomes the new reference instant. A running fling is cancelled.
    /// Returns the target scroll offset.
    pub fn scroll_to_now(&mut self, now: Timestamp, viewport_height: f64) -> TimelineResult<f64> {
        let viewport_height = validate_viewport_height(viewport_height)?;
        self.set_reference_now(now);
        self.momentum.request_cancel();

        let anchor_y = viewport_height * self.config.now_anchor_ratio;
        let target = self
            .state
            .scroll_offset_placing(self.now_units(), anchor_y);
        let from = self.state.scroll_offset;
        self.scroll_animation.start(from, target);
        debug!(
            from,
            target,
            duration_ms = self.scroll_animation.duration_ms(),
            "scroll-to-now started"
        );
        self.emit_event(TimelineEvent::ScrollToNowStarted {
            target_offset: target,
        });
        Ok(target)
    }
}
