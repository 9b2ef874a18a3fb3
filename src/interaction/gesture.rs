use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use super::pointer::{Point, PointerEvent, PointerId, PointerPhase};
use super::velocity::VelocityTracker;

/// Thresholds that separate taps, drags and flings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Displacement from the down position before a touch becomes a drag.
    pub touch_slop_px: f64,
    /// Drag moves and flings below this speed (px/s) do not scroll.
    pub velocity_gate_px_per_sec: f64,
    /// Fraction of finger travel applied to the scroll offset.
    pub drag_sensitivity: f64,
    /// Extra multiplier on release velocity when starting a fling.
    pub velocity_boost: f64,
    /// Trailing window used for instantaneous velocity.
    pub velocity_window_ms: i64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop_px: 8.0,
            velocity_gate_px_per_sec: 300.0,
            drag_sensitivity: 0.5,
            velocity_boost: 1.0,
            velocity_window_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// One pointer down, still within touch slop.
    TrackingUnclassified,
    Dragging,
    /// Two or more pointers down.
    Pinching,
    /// A pinch lost its second pointer; remaining pointers are ignored until
    /// all of them lift.
    PinchReleased,
}

/// Viewport mutation requested by the classifier. The engine applies these
/// in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Raise the cancellation flag of every running animation.
    CancelAnimations,
    /// Add `delta` pixels to the scroll offset.
    Scroll { delta: f64 },
    /// Rescale around row `focal_y` by `factor`.
    Zoom { factor: f64, focal_y: f64 },
    /// Start a fling with this initial velocity (px/s, scroll-offset space).
    Fling { initial_velocity: f64 },
    /// Single pointer released without leaving touch slop.
    Tap { position: Point },
}

pub type GestureActions = SmallVec<[GestureAction; 4]>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SingleTouch {
    id: PointerId,
    down_position: Point,
    last_position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct PinchFrame {
    centroid: Point,
    /// `0.0` until measured for the current pointer set.
    span: f64,
}

/// Turns the ordered pointer stream into viewport actions.
///
/// The single-pointer branch tracks taps and drags; the pinch branch takes
/// over as soon as a second pointer lands and keeps control until every
/// pointer has lifted.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureClassifier {
    config: GestureConfig,
    phase: GesturePhase,
    pointers: IndexMap<PointerId, Point>,
    single: Option<SingleTouch>,
    pinch: PinchFrame,
    velocity: VelocityTracker,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureClassifier {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            pointers: IndexMap::new(),
            single: None,
            pinch: PinchFrame::default(),
            velocity: VelocityTracker::new(config.velocity_window_ms),
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Applies new thresholds. An in-flight gesture is reset.
    pub fn set_config(&mut self, config: GestureConfig) {
        *self = Self::new(config);
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn active_pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Drops every tracked pointer without emitting anything.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.single = None;
        self.pinch = PinchFrame::default();
        self.velocity.reset();
        self.phase = GesturePhase::Idle;
    }

    pub fn handle(&mut self, event: PointerEvent) -> GestureActions {
        let mut actions = GestureActions::new();
        if !event.position.is_finite() {
            // A touch stops animations even when its coordinates are unusable.
            if event.phase == PointerPhase::Down {
                actions.push(GestureAction::CancelAnimations);
            }
            warn!(
                pointer = event.id.0,
                phase = ?event.phase,
                "dropping pointer event with non-finite position"
            );
            return actions;
        }

        match event.phase {
            PointerPhase::Down => self.on_down(event, &mut actions),
            PointerPhase::Move => self.on_move(event, &mut actions),
            PointerPhase::Up => self.on_release(event, true, &mut actions),
            PointerPhase::Cancel => self.on_release(event, false, &mut actions),
        }
        actions
    }

    fn on_down(&mut self, event: PointerEvent, actions: &mut GestureActions) {
        // Every touch stops running animations, even when nothing is running.
        actions.push(GestureAction::CancelAnimations);

        if self.pointers.contains_key(&event.id) {
            warn!(pointer = event.id.0, "ignoring duplicate pointer down");
            return;
        }
        self.pointers.insert(event.id, event.position);

        match self.pointers.len() {
            1 => {
                self.single = Some(SingleTouch {
                    id: event.id,
                    down_position: event.position,
                    last_position: event.position,
                });
                self.velocity.reset();
                self.velocity.add(event.time_ms, event.position.y);
                self.phase = GesturePhase::TrackingUnclassified;
                trace!(pointer = event.id.0, "single pointer tracking started");
            }
            count => {
                if self.single.take().is_some() {
                    trace!("single pointer session aborted by second pointer");
                }
                self.velocity.reset();
                self.phase = GesturePhase::Pinching;
                self.reseed_pinch();
                trace!(pointers = count, "pinch tracking");
            }
        }
    }

    fn on_move(&mut self, event: PointerEvent, actions: &mut GestureActions) {
        let Some(slot) = self.pointers.get_mut(&event.id) else {
            trace!(pointer = event.id.0, "move for unknown pointer ignored");
            return;
        };
        *slot = event.position;

        match self.phase {
            GesturePhase::TrackingUnclassified | GesturePhase::Dragging => {
                self.on_single_move(event, actions);
            }
            GesturePhase::Pinching => self.on_pinch_move(actions),
            GesturePhase::Idle | GesturePhase::PinchReleased => {}
        }
    }

    fn on_single_move(&mut self, event: PointerEvent, actions: &mut GestureActions) {
        let Some(mut touch) = self.single else {
            return;
        };
        if touch.id != event.id {
            return;
        }
        self.velocity.add(event.time_ms, event.position.y);

        if self.phase == GesturePhase::TrackingUnclassified {
            let distance = event.position.distance_to(touch.down_position);
            if distance <= self.config.touch_slop_px {
                return;
            }
            self.phase = GesturePhase::Dragging;
            // The first scroll delta includes the travel inside the slop.
            touch.last_position = touch.down_position;
            trace!(pointer = event.id.0, distance, "drag started");
        }

        let drag_delta = event.position.y - touch.last_position.y;
        touch.last_position = event.position;
        self.single = Some(touch);

        let velocity = self.velocity.velocity();
        if velocity.abs() > self.config.velocity_gate_px_per_sec {
            actions.push(GestureAction::Scroll {
                delta: -drag_delta * self.config.drag_sensitivity,
            });
        } else {
            trace!(velocity, drag_delta, "drag below velocity gate");
        }
    }

    fn on_pinch_move(&mut self, actions: &mut GestureActions) {
        let Some(frame) = self.measure_pinch() else {
            return;
        };
        let previous = self.pinch;
        let factor = if previous.span > 0.0 {
            frame.span / previous.span
        } else {
            1.0
        };
        self.pinch = frame;

        // Pan first so the zoom anchors on the instant that travelled with
        // the fingers to the new centroid.
        let pan = frame.centroid.y - previous.centroid.y;
        if pan != 0.0 {
            actions.push(GestureAction::Scroll { delta: -pan });
        }
        if factor.is_finite() && factor > 0.0 && factor != 1.0 {
            actions.push(GestureAction::Zoom {
                factor,
                focal_y: frame.centroid.y,
            });
        }
    }

    fn on_release(&mut self, event: PointerEvent, completed: bool, actions: &mut GestureActions) {
        if self.pointers.shift_remove(&event.id).is_none() {
            trace!(pointer = event.id.0, "release for unknown pointer ignored");
            return;
        }

        match self.phase {
            GesturePhase::TrackingUnclassified | GesturePhase::Dragging => {
                self.finish_single(event, completed, actions);
            }
            GesturePhase::Pinching => {
                if self.pointers.len() >= 2 {
                    self.reseed_pinch();
                } else {
                    self.pinch = PinchFrame::default();
                    self.phase = if self.pointers.is_empty() {
                        GesturePhase::Idle
                    } else {
                        GesturePhase::PinchReleased
                    };
                    trace!(remaining = self.pointers.len(), "pinch ended");
                }
            }
            GesturePhase::PinchReleased | GesturePhase::Idle => {
                if self.pointers.is_empty() {
                    self.phase = GesturePhase::Idle;
                }
            }
        }
    }

    fn finish_single(&mut self, event: PointerEvent, completed: bool, actions: &mut GestureActions) {
        let phase = self.phase;
        self.phase = GesturePhase::Idle;
        let Some(touch) = self.single.take() else {
            return;
        };
        if !completed {
            self.velocity.reset();
            return;
        }

        match phase {
            GesturePhase::TrackingUnclassified => {
                actions.push(GestureAction::Tap {
                    position: touch.down_position,
                });
            }
            GesturePhase::Dragging => {
                self.velocity.add(event.time_ms, event.position.y);
                let release_velocity = self.velocity.velocity();
                if release_velocity.abs() > self.config.velocity_gate_px_per_sec {
                    actions.push(GestureAction::Fling {
                        initial_velocity: -release_velocity
                            * self.config.drag_sensitivity
                            * self.config.velocity_boost,
                    });
                } else {
                    trace!(release_velocity, "release below velocity gate, no fling");
                }
            }
            _ => {}
        }
        self.velocity.reset();
    }

    fn reseed_pinch(&mut self) {
        self.pinch = self.measure_pinch().unwrap_or_default();
    }

    fn measure_pinch(&self) -> Option<PinchFrame> {
        let count = self.pointers.len();
        if count < 2 {
            return None;
        }
        let inv = 1.0 / count as f64;
        let centroid = Point::new(
            self.pointers.values().map(|p| p.x).sum::<f64>() * inv,
            self.pointers.values().map(|p| p.y).sum::<f64>() * inv,
        );

        let positions: SmallVec<[Point; 4]> = self.pointers.values().copied().collect();
        let mut total = 0.0;
        let mut pairs = 0usize;
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                total += a.distance_to(*b);
                pairs += 1;
            }
        }
        let span = if pairs == 0 { 0.0 } else { total / pairs as f64 };
        Some(PinchFrame { centroid, span })
    }
}

#[cfg(test)]
mod tests {
    use super::{GestureAction, GestureClassifier, GesturePhase};
    use crate::interaction::PointerEvent;
    use approx::assert_relative_eq;

    fn scroll_total(actions: &[GestureAction]) -> f64 {
        actions
            .iter()
            .filter_map(|action| match action {
                GestureAction::Scroll { delta } => Some(*delta),
                _ => None,
            })
            .sum()
    }

    #[test]
    fn down_always_requests_cancellation() {
        let mut classifier = GestureClassifier::default();
        let actions = classifier.handle(PointerEvent::down(1, 10.0, 10.0, 0));
        assert_eq!(actions.as_slice(), &[GestureAction::CancelAnimations]);
        assert_eq!(classifier.phase(), GesturePhase::TrackingUnclassified);
    }

    #[test]
    fn non_finite_down_still_requests_cancellation() {
        let mut classifier = GestureClassifier::default();
        let actions = classifier.handle(PointerEvent::down(1, f64::NAN, 10.0, 0));
        assert_eq!(actions.as_slice(), &[GestureAction::CancelAnimations]);
        assert_eq!(classifier.phase(), GesturePhase::Idle);
        assert_eq!(classifier.active_pointer_count(), 0);
    }

    #[test]
    fn small_wobble_is_a_tap() {
        let mut classifier = GestureClassifier::default();
        classifier.handle(PointerEvent::down(1, 50.0, 100.0, 0));
        let moved = classifier.handle(PointerEvent::moved(1, 53.0, 104.0, 30));
        assert!(moved.is_empty());
        let up = classifier.handle(PointerEvent::up(1, 53.0, 104.0, 400));
        assert!(matches!(up.as_slice(), [GestureAction::Tap { .. }]));
        assert_eq!(classifier.phase(), GesturePhase::Idle);
    }

    #[test]
    fn fast_drag_scrolls_against_finger_at_half_speed() {
        let mut classifier = GestureClassifier::default();
        classifier.handle(PointerEvent::down(1, 0.0, 300.0, 0));
        let mut actions = Vec::new();
        // 20 px per 16 ms = 1250 px/s downwards.
        for step in 1..=5 {
            actions.extend(classifier.handle(PointerEvent::moved(
                1,
                0.0,
                300.0 + f64::from(step) * 20.0,
                i64::from(step) * 16,
            )));
        }
        assert_eq!(classifier.phase(), GesturePhase::Dragging);
        // Whole travel counts from the down position once the gate opens.
        assert_relative_eq!(scroll_total(&actions), -50.0, epsilon = 1e-9);

        let up = classifier.handle(PointerEvent::up(1, 0.0, 420.0, 96));
        let fling = up.iter().find_map(|action| match action {
            GestureAction::Fling { initial_velocity } => Some(*initial_velocity),
            _ => None,
        });
        let fling = fling.expect("fling should start");
        assert!(fling < -300.0);
    }

    #[test]
    fn slow_drag_never_scrolls() {
        let mut classifier = GestureClassifier::default();
        classifier.handle(PointerEvent::down(1, 0.0, 0.0, 0));
        let mut actions = Vec::new();
        // 4 px per 16 ms = 250 px/s.
        for step in 1..=50 {
            actions.extend(classifier.handle(PointerEvent::moved(
                1,
                0.0,
                f64::from(step) * 4.0,
                i64::from(step) * 16,
            )));
        }
        actions.extend(classifier.handle(PointerEvent::up(1, 0.0, 200.0, 816)));
        assert_eq!(classifier.phase(), GesturePhase::Idle);
        assert_eq!(scroll_total(&actions), 0.0);
        assert!(
            !actions
                .iter()
                .any(|a| matches!(a, GestureAction::Fling { .. } | GestureAction::Tap { .. }))
        );
    }

    #[test]
    fn second_pointer_aborts_drag_and_pinches() {
        let mut classifier = GestureClassifier::default();
        classifier.handle(PointerEvent::down(1, 100.0, 100.0, 0));
        classifier.handle(PointerEvent::down(2, 100.0, 300.0, 10));
        assert_eq!(classifier.phase(), GesturePhase::Pinching);

        // Span 200 -> 400, centroid 200 -> 300.
        let actions = classifier.handle(PointerEvent::moved(2, 100.0, 500.0, 26));
        assert_eq!(
            actions.as_slice(),
            &[
                GestureAction::Scroll { delta: -100.0 },
                GestureAction::Zoom {
                    factor: 2.0,
                    focal_y: 300.0
                },
            ]
        );

        let up = classifier.handle(PointerEvent::up(2, 100.0, 500.0, 40));
        assert!(up.is_empty());
        assert_eq!(classifier.phase(), GesturePhase::PinchReleased);

        // Remaining finger does not resume dragging.
        let moved = classifier.handle(PointerEvent::moved(1, 100.0, 600.0, 50));
        assert!(moved.is_empty());
        let last_up = classifier.handle(PointerEvent::up(1, 100.0, 600.0, 60));
        assert!(last_up.is_empty());
        assert_eq!(classifier.phase(), GesturePhase::Idle);
    }

    #[test]
    fn malformed_stream_is_ignored() {
        let mut classifier = GestureClassifier::default();
        assert!(classifier.handle(PointerEvent::up(9, 0.0, 0.0, 0)).is_empty());
        assert!(classifier.handle(PointerEvent::moved(9, 0.0, 0.0, 5)).is_empty());
        assert!(
            classifier
                .handle(PointerEvent::down(1, f64::NAN, 0.0, 10))
                .is_empty()
        );
        assert_eq!(classifier.phase(), GesturePhase::Idle);
        assert_eq!(classifier.active_pointer_count(), 0);
    }

    #[test]
    fn cancelled_drag_emits_nothing() {
        let mut classifier = GestureClassifier::default();
        classifier.handle(PointerEvent::down(1, 0.0, 0.0, 0));
        classifier.handle(PointerEvent::moved(1, 0.0, 40.0, 16));
        let actions = classifier.handle(PointerEvent::cancel(1, 0.0, 80.0, 32));
        assert!(actions.is_empty());
        assert_eq!(classifier.phase(), GesturePhase::Idle);
    }
}
