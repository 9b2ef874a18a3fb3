use crate::core::scale_level::ScaleLevel;
use crate::core::time_converter::ORIGIN_BIAS;

/// Linear mapping between unit indices of two adjacent levels.
///
/// `coarse = coarse_origin + (fine - fine_origin) / ratio`
#[derive(Debug, Clone, Copy, PartialEq)]
struct LevelEdge {
    ratio: f64,
    fine_origin: f64,
    coarse_origin: f64,
}

impl LevelEdge {
    const fn plain(ratio: f64) -> Self {
        Self {
            ratio,
            fine_origin: 0.0,
            coarse_origin: 0.0,
        }
    }

    const fn biased(ratio: f64, fine_origin: f64) -> Self {
        Self {
            ratio,
            fine_origin,
            coarse_origin: ORIGIN_BIAS,
        }
    }

    fn coarsen(self, fine: f64) -> f64 {
        self.coarse_origin + (fine - self.fine_origin) / self.ratio
    }

    fn refine(self, coarse: f64) -> f64 {
        self.fine_origin + (coarse - self.coarse_origin) * self.ratio
    }
}

/// Edge from `ScaleLevel::ALL[i]` to `ScaleLevel::ALL[i + 1]`.
const EDGES: [LevelEdge; ScaleLevel::ALL.len() - 1] = [
    LevelEdge::plain(5.0),                // minute -> 5 minutes
    LevelEdge::plain(2.0),                // 5 minutes -> 10 minutes
    LevelEdge::plain(3.0),                // 10 minutes -> half hour
    LevelEdge::plain(2.0),                // half hour -> hour
    LevelEdge::plain(24.0),               // hour -> day
    LevelEdge::plain(7.0),                // day -> week
    LevelEdge::plain(4.0),                // week -> month
    LevelEdge::plain(3.0),                // month -> quarter
    LevelEdge::biased(4.0, 0.0),          // quarter -> year
    LevelEdge::biased(10.0, ORIGIN_BIAS), // year -> decade
    LevelEdge::biased(10.0, ORIGIN_BIAS), // decade -> century
];

/// Nominal conversion of a unit index from one level to another.
///
/// Uses the fixed ratios of the registry and the shared origin bias, chaining
/// through every intermediate level. This is a constant-time estimate: it
/// ignores calendar irregularity (weeks per month, days per year) and the
/// offset between "today" and "this Monday", so level switches that must
/// keep a pixel pinned go through the exact time converter instead.
#[must_use]
pub fn convert_position(from: ScaleLevel, to: ScaleLevel, position: f64) -> f64 {
    let mut current = position;
    if to > from {
        for edge in &EDGES[from.index()..to.index()] {
            current = edge.coarsen(current);
        }
    } else {
        for edge in EDGES[to.index()..from.index()].iter().rev() {
            current = edge.refine(current);
        }
    }
    current
}
