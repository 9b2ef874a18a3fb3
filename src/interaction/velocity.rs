use std::collections::VecDeque;

const HISTORY_SIZE: usize = 20;

/// No movement for this long before the last sample means the finger is resting.
const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    time_ms: i64,
    position: f64,
}

/// One-axis velocity estimator over a short trailing window.
///
/// Velocity is the least-squares slope of position over time for the samples
/// no older than `window_ms` relative to the newest one, so it reflects the
/// motion just before the query rather than the average over the gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityTracker {
    window_ms: i64,
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    #[must_use]
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Records a position. Samples older than the newest recorded one are
    /// dropped; equal timestamps replace the previous sample.
    pub fn add(&mut self, time_ms: i64, position: f64) {
        if !position.is_finite() {
            return;
        }
        if let Some(last) = self.samples.back_mut() {
            if time_ms < last.time_ms {
                return;
            }
            if time_ms == last.time_ms {
                last.position = position;
                return;
            }
        }
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, position });
    }

    /// Velocity in units per second; `0.0` with fewer than two samples.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        let Some(newest) = self.samples.back().copied() else {
            return 0.0;
        };

        let window: Vec<Sample> = self
            .samples
            .iter()
            .rev()
            .take_while(|sample| newest.time_ms - sample.time_ms <= self.window_ms)
            .copied()
            .collect();
        if window.len() < 2 {
            return 0.0;
        }

        // Finger held still before the query: no fling, no drag.
        if let Some(previous) = window.get(1) {
            if newest.time_ms - previous.time_ms > ASSUME_STOPPED_MS
                && (newest.position - previous.position).abs() < f64::EPSILON
            {
                return 0.0;
            }
        }

        let count = window.len() as f64;
        let mean_t = window
            .iter()
            .map(|s| (s.time_ms - newest.time_ms) as f64)
            .sum::<f64>()
            / count;
        let mean_p = window.iter().map(|s| s.position).sum::<f64>() / count;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for sample in &window {
            let dt = (sample.time_ms - newest.time_ms) as f64 - mean_t;
            covariance += dt * (sample.position - mean_p);
            variance += dt * dt;
        }
        if variance <= f64::EPSILON {
            return 0.0;
        }

        // Slope is per millisecond.
        covariance / variance * 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::VelocityTracker;
    use approx::assert_relative_eq;

    #[test]
    fn constant_motion_reports_exact_speed() {
        let mut tracker = VelocityTracker::new(100);
        for step in 0..6 {
            tracker.add(step * 16, step as f64 * 8.0);
        }
        assert_relative_eq!(tracker.velocity(), 500.0, epsilon = 1e-9);
    }

    #[test]
    fn only_trailing_window_contributes() {
        let mut tracker = VelocityTracker::new(50);
        // Fast early motion, then slow.
        tracker.add(0, 0.0);
        tracker.add(10, 100.0);
        tracker.add(200, 100.0);
        tracker.add(220, 102.0);
        tracker.add(240, 104.0);
        assert_relative_eq!(tracker.velocity(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn single_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(0, 10.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn resting_before_release_zeroes_velocity() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(0, 0.0);
        tracker.add(16, 40.0);
        tracker.add(80, 40.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn out_of_order_samples_are_ignored() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(20, 0.0);
        tracker.add(10, 500.0);
        tracker.add(40, 10.0);
        assert_eq!(tracker.sample_count(), 2);
        assert_relative_eq!(tracker.velocity(), 500.0, epsilon = 1e-9);
    }
}
