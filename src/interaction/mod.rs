//! Pointer state machines and frame-stepped animations.
//!
//! Nothing here touches `ViewportState` directly: classifiers and animations
//! produce deltas/targets that `TimelineEngine` commits.

mod gesture;
mod momentum;
mod pointer;
mod scroll_animation;
mod velocity;

pub use gesture::{GestureAction, GestureActions, GestureClassifier, GestureConfig, GesturePhase};
pub use momentum::{MomentumConfig, MomentumEngine, MomentumState, MomentumStep};
pub use pointer::{Point, PointerEvent, PointerId, PointerPhase};
pub use scroll_animation::{CubicBezierEasing, ScrollAnimationStep, ScrollToNowAnimation};
pub use velocity::VelocityTracker;
