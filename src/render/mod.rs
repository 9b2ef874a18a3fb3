mod frame;
mod null_renderer;

pub use frame::{NowIndicator, RenderFrame, UnitRow};
pub use null_renderer::NullRenderer;

use crate::error::TimelineResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame` built from one
/// viewport snapshot, so drawing code never reads gesture or animation state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}
