use serde::{Deserialize, Serialize};

/// Converts the user-facing friction multiplier into a decay rate per second
/// (`velocity(t) = v0 * exp(-DECAY_PER_FRICTION * friction * t)`).
const DECAY_PER_FRICTION: f64 = 4.2;

/// Tuning for post-release fling scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// Higher values stop the fling sooner.
    pub friction_multiplier: f64,
    /// Fling ends once `abs(velocity)` drops below this (px/s).
    pub stop_velocity_abs: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            friction_multiplier: 0.9,
            stop_velocity_abs: 1.0,
        }
    }
}

impl MomentumConfig {
    fn decay_rate(self) -> f64 {
        DECAY_PER_FRICTION * self.friction_multiplier
    }
}

/// Public fling runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MomentumState {
    pub active: bool,
    pub initial_velocity: f64,
    pub velocity: f64,
    pub elapsed_ms: f64,
    /// Pixels already committed to the scroll offset by this run.
    pub travelled: f64,
}

/// Result of advancing the fling by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MomentumStep {
    /// Nothing is running.
    Idle,
    /// A cancellation request was observed; the run ended without a delta.
    Cancelled,
    /// Apply `delta` to the scroll offset; `finished` marks the last frame.
    Moved { delta: f64, finished: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MomentumRun {
    initial_velocity: f64,
    elapsed_ms: f64,
    travelled: f64,
    duration_ms: f64,
}

impl MomentumRun {
    fn offset_at(&self, elapsed_ms: f64, decay_rate: f64) -> f64 {
        let t = elapsed_ms / 1_000.0;
        self.initial_velocity / decay_rate * (1.0 - (-decay_rate * t).exp())
    }

    fn velocity_at(&self, elapsed_ms: f64, decay_rate: f64) -> f64 {
        self.initial_velocity * (-decay_rate * elapsed_ms / 1_000.0).exp()
    }
}

/// Exponential-decay fling with cooperative cancellation.
///
/// At most one run exists. Cancellation is a flag observed at the start of
/// the next `step`, so a run stops at a frame boundary and already applied
/// displacement is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MomentumEngine {
    config: MomentumConfig,
    run: Option<MomentumRun>,
    cancel_requested: bool,
}

impl MomentumEngine {
    #[must_use]
    pub fn new(config: MomentumConfig) -> Self {
        Self {
            config,
            run: None,
            cancel_requested: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> MomentumConfig {
        self.config
    }

    pub fn set_config(&mut self, config: MomentumConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    /// Raises the cancellation flag. Harmless when no run is active.
    pub fn request_cancel(&mut self) {
        self.cancel_requested = true;
    }

    /// Replaces any current run with a new one and clears the cancel flag.
    ///
    /// Returns `false` (and starts nothing) for zero or non-finite velocity.
    pub fn start(&mut self, initial_velocity: f64) -> bool {
        self.cancel_requested = false;
        self.run = None;
        if !initial_velocity.is_finite() || initial_velocity == 0.0 {
            return false;
        }

        let decay_rate = self.config.decay_rate();
        let ratio = self.config.stop_velocity_abs / initial_velocity.abs();
        let duration_ms = if ratio >= 1.0 {
            0.0
        } else {
            -ratio.ln() / decay_rate * 1_000.0
        };
        self.run = Some(MomentumRun {
            initial_velocity,
            elapsed_ms: 0.0,
            travelled: 0.0,
            duration_ms,
        });
        true
    }

    /// Advances the run by `frame_ms` and returns the delta to commit.
    pub fn step(&mut self, frame_ms: f64) -> MomentumStep {
        if self.cancel_requested {
            self.cancel_requested = false;
            return match self.run.take() {
                Some(_) => MomentumStep::Cancelled,
                None => MomentumStep::Idle,
            };
        }

        let decay_rate = self.config.decay_rate();
        let Some(run) = self.run.as_mut() else {
            return MomentumStep::Idle;
        };

        let frame_ms = if frame_ms.is_finite() { frame_ms.max(0.0) } else { 0.0 };
        let elapsed = (run.elapsed_ms + frame_ms).min(run.duration_ms);
        let finished = elapsed >= run.duration_ms;
        let position = run.offset_at(elapsed, decay_rate);
        let delta = position - run.travelled;
        run.elapsed_ms = elapsed;
        run.travelled = position;

        if finished {
            self.run = None;
        }
        MomentumStep::Moved { delta, finished }
    }

    #[must_use]
    pub fn state(&self) -> MomentumState {
        let decay_rate = self.config.decay_rate();
        match self.run {
            Some(run) => MomentumState {
                active: true,
                initial_velocity: run.initial_velocity,
                velocity: run.velocity_at(run.elapsed_ms, decay_rate),
                elapsed_ms: run.elapsed_ms,
                travelled: run.travelled,
            },
            None => MomentumState::default(),
        }
    }

    /// Total displacement a fling with this velocity would produce if never
    /// cancelled.
    #[must_use]
    pub fn projected_distance(&self, initial_velocity: f64) -> f64 {
        initial_velocity / self.config.decay_rate()
    }
}
