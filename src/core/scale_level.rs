use serde::{Deserialize, Serialize};

/// Discrete timeline granularity, ordered from finest to coarsest.
///
/// The declaration order is the granularity order; `finer`/`coarser` walk it
/// by index and `Ord` follows it (`MINUTE < HOUR < CENTURY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleLevel {
    Minute,
    FiveMinutes,
    TenMinutes,
    HalfHour,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Decade,
    Century,
}

impl ScaleLevel {
    /// All levels in granularity order.
    pub const ALL: [ScaleLevel; 12] = [
        ScaleLevel::Minute,
        ScaleLevel::FiveMinutes,
        ScaleLevel::TenMinutes,
        ScaleLevel::HalfHour,
        ScaleLevel::Hour,
        ScaleLevel::Day,
        ScaleLevel::Week,
        ScaleLevel::Month,
        ScaleLevel::Quarter,
        ScaleLevel::Year,
        ScaleLevel::Decade,
        ScaleLevel::Century,
    ];

    pub const FINEST: ScaleLevel = ScaleLevel::Minute;
    pub const COARSEST: ScaleLevel = ScaleLevel::Century;

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Minute => "1 minute",
            Self::FiveMinutes => "5 minutes",
            Self::TenMinutes => "10 minutes",
            Self::HalfHour => "half hour",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Decade => "decade",
            Self::Century => "century",
        }
    }

    /// Multiplicative factor from this level's unit to the next coarser unit.
    ///
    /// `Week -> Month` is the nominal 4; the converter never relies on it for
    /// time arithmetic, only the zoom thresholds do. `Century` has no coarser
    /// neighbor and reports 1.
    #[must_use]
    pub fn ratio_to_next(self) -> f64 {
        match self {
            Self::Minute => 5.0,
            Self::FiveMinutes => 2.0,
            Self::TenMinutes => 3.0,
            Self::HalfHour => 2.0,
            Self::Hour => 24.0,
            Self::Day => 7.0,
            Self::Week => 4.0,
            Self::Month => 3.0,
            Self::Quarter => 4.0,
            Self::Year => 10.0,
            Self::Decade => 10.0,
            Self::Century => 1.0,
        }
    }

    #[must_use]
    pub fn finer(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    #[must_use]
    pub fn coarser(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn is_finest(self) -> bool {
        self.finer().is_none()
    }

    #[must_use]
    pub fn is_coarsest(self) -> bool {
        self.coarser().is_none()
    }

    /// Levels whose unit 0 is pinned to the start of the current day and
    /// whose unit length is a fixed number of minutes.
    #[must_use]
    pub fn is_intraday(self) -> bool {
        self <= Self::Hour
    }

    /// Fixed unit length in minutes for intraday levels.
    #[must_use]
    pub(crate) fn intraday_minutes(self) -> Option<i64> {
        match self {
            Self::Minute => Some(1),
            Self::FiveMinutes => Some(5),
            Self::TenMinutes => Some(10),
            Self::HalfHour => Some(30),
            Self::Hour => Some(60),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScaleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
