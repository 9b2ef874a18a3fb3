//! Host-facing extension points.
//!
//! Observers only read engine state; they never feed back into the
//! viewport.

mod observers;

pub use observers::{ObserverContext, TimelineEvent, TimelineObserver};
