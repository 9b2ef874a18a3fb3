use tracing::debug;

use crate::core::{Timestamp, ViewportState};
use crate::error::TimelineResult;
use crate::interaction::{GestureClassifier, MomentumEngine, ScrollToNowAnimation};
use crate::render::Renderer;

use super::{TimelineEngine, TimelineEngineConfig};

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine showing `config.initial_level` with the start of the
    /// reference day at the top row.
    pub fn new(
        renderer: R,
        config: TimelineEngineConfig,
        reference_now: Timestamp,
    ) -> TimelineResult<Self> {
        let config = config.validate()?;
        debug!(
            level = %config.initial_level,
            unit_height = config.initial_unit_height,
            %reference_now,
            "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            state: ViewportState::new(config.initial_level, config.initial_unit_height),
            reference_now,
            selected_date: None,
            gestures: GestureClassifier::new(config.gesture_config()),
            momentum: MomentumEngine::new(config.momentum_config()),
            scroll_animation: ScrollToNowAnimation::new(config.scroll_to_now_duration_ms),
            observers: Vec::new(),
            config,
        })
    }

    /// Replaces tuning at runtime. Any gesture in progress is dropped and
    /// running animations keep going with the new friction/duration.
    pub fn set_config(&mut self, config: TimelineEngineConfig) -> TimelineResult<()> {
        let config = config.validate()?;
        self.gestures.set_config(config.gesture_config());
        self.momentum.set_config(config.momentum_config());
        self.scroll_animation
            .set_duration_ms(config.scroll_to_now_duration_ms);
        self.viewport = config.viewport;
        self.config = config;
        Ok(())
    }
}
