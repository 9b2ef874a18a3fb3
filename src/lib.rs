//! timeline-rs: headless multi-scale timeline engine.
//!
//! A vertical timeline zooms continuously from minutes to centuries by
//! pinching, scrolls by drag and fling, and keeps the instant under the
//! pinch centroid fixed across level switches. Hosts feed pointer events
//! and frame ticks, then render from a snapshot.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig, TimelineSnapshot};
pub use error::{TimelineError, TimelineResult};
