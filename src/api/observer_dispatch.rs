use crate::extensions::{ObserverContext, TimelineEvent};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            viewport: self.viewport,
            state: self.state,
            reference_now: self.reference_now,
            selected_date: self.selected_date,
            gesture_phase: self.gestures.phase(),
            momentum: self.momentum.state(),
        }
    }

    pub(super) fn emit_event(&mut self, event: TimelineEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }

    pub(super) fn emit_scroll_changed(&mut self) {
        self.emit_event(TimelineEvent::ScrollChanged {
            scroll_offset: self.state.scroll_offset,
        });
    }
}
