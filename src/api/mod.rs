mod animation_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod gesture_controller;
mod navigation_controller;
mod observer_dispatch;
mod observer_registry;
mod render_frame_builder;
mod validation;
mod zoom_controller;
mod zoom_target_resolver;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::TimelineSnapshot;
pub use zoom_controller::ZoomOutcome;
pub use zoom_target_resolver::{
    ZoomLimits, ZoomResolution, anchor_zoom_resolution, resolve_zoom_target,
};
