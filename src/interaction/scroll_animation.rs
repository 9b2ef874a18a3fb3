use serde::{Deserialize, Serialize};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

/// CSS-style cubic bezier timing curve through `(0,0)`, `(x1,y1)`,
/// `(x2,y2)`, `(1,1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezierEasing {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezierEasing {
    /// Material "standard" curve: quick start, long gentle settle.
    pub const FAST_OUT_SLOW_IN: Self = Self::new(0.4, 0.0, 0.2, 1.0);

    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    fn solve_t_for_x(self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = Self::sample_slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) * 0.5;
        }
        t
    }

    /// Eased progress for linear progress `x`, clamped to `[0, 1]`.
    #[must_use]
    pub fn transform(self, x: f64) -> f64 {
        if !x.is_finite() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t_for_x(x))
    }
}

/// Result of advancing the scroll-to-now animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAnimationStep {
    Idle,
    Cancelled,
    /// Set the scroll offset to `offset`.
    Moved { offset: f64, finished: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollRun {
    from: f64,
    to: f64,
    elapsed_ms: f64,
}

/// Time-based eased scroll toward a fixed target offset.
///
/// Shares the cancellation model of [`super::MomentumEngine`]: a raised flag
/// ends the run at the next frame and keeps the offset reached so far.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollToNowAnimation {
    duration_ms: f64,
    easing: CubicBezierEasing,
    run: Option<ScrollRun>,
    cancel_requested: bool,
}

impl ScrollToNowAnimation {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            easing: CubicBezierEasing::FAST_OUT_SLOW_IN,
            run: None,
            cancel_requested: false,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: CubicBezierEasing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.run.map(|run| run.to)
    }

    pub fn request_cancel(&mut self) {
        self.cancel_requested = true;
    }

    /// Moves the running endpoints by `delta_px` after the offset frame
    /// itself moved, so the eased path stays on the same instants.
    pub fn shift_by(&mut self, delta_px: f64) {
        if let Some(run) = self.run.as_mut() {
            run.from += delta_px;
            run.to += delta_px;
        }
    }

    pub fn start(&mut self, from: f64, to: f64) {
        self.cancel_requested = false;
        self.run = Some(ScrollRun {
            from,
            to,
            elapsed_ms: 0.0,
        });
    }

    pub fn step(&mut self, frame_ms: f64) -> ScrollAnimationStep {
        if self.cancel_requested {
            self.cancel_requested = false;
            return match self.run.take() {
                Some(_) => ScrollAnimationStep::Cancelled,
                None => ScrollAnimationStep::Idle,
            };
        }
        let Some(run) = self.run.as_mut() else {
            return ScrollAnimationStep::Idle;
        };

        let frame_ms = if frame_ms.is_finite() { frame_ms.max(0.0) } else { 0.0 };
        run.elapsed_ms += frame_ms;
        let finished = self.duration_ms <= 0.0 || run.elapsed_ms >= self.duration_ms;
        let offset = if finished {
            run.to
        } else {
            let eased = self.easing.transform(run.elapsed_ms / self.duration_ms);
            run.from + (run.to - run.from) * eased
        };

        if finished {
            self.run = None;
        }
        ScrollAnimationStep::Moved { offset, finished }
    }
}
