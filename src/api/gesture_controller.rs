use tracing::{debug, trace};

use crate::extensions::TimelineEvent;
use crate::interaction::{GestureAction, GestureActions, GesturePhase, PointerEvent};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Feeds one pointer event and commits the resulting actions in order.
    ///
    /// Malformed events (unknown pointer, duplicate down, non-finite
    /// position) are ignored. The returned list is what was applied.
    pub fn apply_pointer_event(&mut self, event: PointerEvent) -> GestureActions {
        let actions = self.gestures.handle(event);
        for action in &actions {
            self.apply_gesture_action(*action);
        }
        actions
    }

    fn apply_gesture_action(&mut self, action: GestureAction) {
        match action {
            GestureAction::CancelAnimations => self.cancel_animations(),
            GestureAction::Scroll { delta } => {
                self.pan(delta);
            }
            GestureAction::Zoom { factor, focal_y } => {
                self.zoom(factor, focal_y);
            }
            GestureAction::Fling { initial_velocity } => self.start_fling(initial_velocity),
            GestureAction::Tap { position } => {
                let time = self.time_at_pixel(position.y);
                trace!(x = position.x, y = position.y, %time, "tap");
                self.emit_event(TimelineEvent::Tap {
                    x: position.x,
                    y: position.y,
                    time,
                });
            }
        }
    }

    /// Raises the cancellation flag of the fling and the scroll-to-now
    /// animation. Each stops at its next frame.
    pub fn cancel_animations(&mut self) {
        if self.momentum.is_active() {
            debug!(
                velocity = self.momentum.state().velocity,
                "fling cancellation requested"
            );
        }
        self.momentum.request_cancel();
        self.scroll_animation.request_cancel();
    }

    pub(super) fn start_fling(&mut self, initial_velocity: f64) {
        if self.momentum.is_active() {
            self.emit_event(TimelineEvent::FlingEnded { cancelled: true });
        }
        if self.momentum.start(initial_velocity) {
            debug!(
                initial_velocity,
                projected = self.momentum.projected_distance(initial_velocity),
                "fling started"
            );
            self.emit_event(TimelineEvent::FlingStarted { initial_velocity });
        }
    }
}
