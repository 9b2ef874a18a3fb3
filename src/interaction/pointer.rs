use serde::{Deserialize, Serialize};

/// Stable identity of one finger/pointer for the duration of its contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Platform aborted the contact (e.g. system gesture took over).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One entry of the ordered pointer stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
    /// Monotonic event time in milliseconds.
    pub time_ms: i64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(id: u64, phase: PointerPhase, x: f64, y: f64, time_ms: i64) -> Self {
        Self {
            id: PointerId(id),
            phase,
            position: Point::new(x, y),
            time_ms,
        }
    }

    #[must_use]
    pub fn down(id: u64, x: f64, y: f64, time_ms: i64) -> Self {
        Self::new(id, PointerPhase::Down, x, y, time_ms)
    }

    #[must_use]
    pub fn moved(id: u64, x: f64, y: f64, time_ms: i64) -> Self {
        Self::new(id, PointerPhase::Move, x, y, time_ms)
    }

    #[must_use]
    pub fn up(id: u64, x: f64, y: f64, time_ms: i64) -> Self {
        Self::new(id, PointerPhase::Up, x, y, time_ms)
    }

    #[must_use]
    pub fn cancel(id: u64, x: f64, y: f64, time_ms: i64) -> Self {
        Self::new(id, PointerPhase::Cancel, x, y, time_ms)
    }
}
