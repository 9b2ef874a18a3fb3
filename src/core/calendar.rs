//! Civil-calendar period arithmetic on wall-clock timestamps.
//!
//! All functions are total: inputs outside chrono's representable range are
//! saturated instead of panicking, so the coordinate math built on top of
//! them never has to surface an error to the renderer.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Wall-clock instant used by the timeline (local civil time, no zone).
pub type Timestamp = NaiveDateTime;

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

// Kept well inside chrono's +/-262_143 so month/century stepping never leaves it.
const MIN_SUPPORTED_YEAR: i64 = -200_000;
const MAX_SUPPORTED_YEAR: i64 = 200_000;

/// Calendar periods whose millisecond length varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalendarPeriod {
    Month,
    Quarter,
    Year,
    Decade,
    Century,
}

impl CalendarPeriod {
    /// Months covered by one period.
    fn months(self) -> i64 {
        match self {
            Self::Month => 1,
            Self::Quarter => 3,
            Self::Year => 12,
            Self::Decade => 120,
            Self::Century => 1_200,
        }
    }

    /// Sequential index of the period containing `time` (floor semantics for
    /// negative years, so year -5 lies in decade -1).
    pub(crate) fn index_of(self, time: Timestamp) -> i64 {
        absolute_month(time).div_euclid(self.months())
    }

    /// First instant of the period with the given index.
    pub(crate) fn start_of(self, index: i64) -> Timestamp {
        month_start(index.saturating_mul(self.months()))
    }

    /// Position of `time` inside its own period, in `[0, 1)`.
    pub(crate) fn fraction_of(self, time: Timestamp) -> (i64, f64) {
        let index = self.index_of(time);
        let start = self.start_of(index);
        let end = self.start_of(index + 1);
        let span = millis_between(start, end);
        if span <= 0 {
            return (index, 0.0);
        }
        (index, millis_between(start, time) as f64 / span as f64)
    }

    /// Inverse of `fraction_of`: instant at `fraction` of period `index`.
    pub(crate) fn instant_at(self, index: i64, fraction: f64) -> Timestamp {
        let start = self.start_of(index);
        let end = self.start_of(index.saturating_add(1));
        let span = millis_between(start, end);
        offset_millis(start, fraction * span as f64)
    }
}

fn clamp_year(year: i64) -> i32 {
    // Clamped range fits i32.
    year.clamp(MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR) as i32
}

fn date(year: i64, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(clamp_year(year), month, day).unwrap_or(NaiveDate::MIN)
}

/// Months since year 0, January.
#[must_use]
pub fn absolute_month(time: Timestamp) -> i64 {
    i64::from(time.year()) * 12 + i64::from(time.month0())
}

/// First instant of the month with the given absolute month index.
#[must_use]
pub fn month_start(absolute_month: i64) -> Timestamp {
    let year = absolute_month.div_euclid(12);
    // rem_euclid(12) is in 0..12.
    let month = absolute_month.rem_euclid(12) as u32 + 1;
    date(year, month, 1).and_time(NaiveTime::MIN)
}

#[must_use]
pub fn start_of_day(time: Timestamp) -> Timestamp {
    time.date().and_time(NaiveTime::MIN)
}

/// Monday 00:00 of the ISO week containing `time`.
#[must_use]
pub fn start_of_week(time: Timestamp) -> Timestamp {
    let days_from_monday = i64::from(time.weekday().num_days_from_monday());
    offset_millis(
        start_of_day(time),
        -(days_from_monday * MILLIS_PER_DAY) as f64,
    )
}

#[must_use]
pub fn start_of_month(time: Timestamp) -> Timestamp {
    month_start(absolute_month(time))
}

#[must_use]
pub fn start_of_quarter(time: Timestamp) -> Timestamp {
    CalendarPeriod::Quarter.start_of(CalendarPeriod::Quarter.index_of(time))
}

#[must_use]
pub fn start_of_year(time: Timestamp) -> Timestamp {
    CalendarPeriod::Year.start_of(CalendarPeriod::Year.index_of(time))
}

#[must_use]
pub fn start_of_decade(time: Timestamp) -> Timestamp {
    CalendarPeriod::Decade.start_of(CalendarPeriod::Decade.index_of(time))
}

#[must_use]
pub fn start_of_century(time: Timestamp) -> Timestamp {
    CalendarPeriod::Century.start_of(CalendarPeriod::Century.index_of(time))
}

/// Signed milliseconds from `from` to `to`.
#[must_use]
pub fn millis_between(from: Timestamp, to: Timestamp) -> i64 {
    (to - from).num_milliseconds()
}

/// `base` shifted by a (possibly fractional) millisecond offset, rounded to
/// the nearest millisecond and saturated at chrono's bounds.
#[must_use]
pub fn offset_millis(base: Timestamp, millis: f64) -> Timestamp {
    if !millis.is_finite() {
        return base;
    }
    // `as` saturates for out-of-range floats.
    let rounded = millis.round() as i64;
    let saturated = if rounded >= 0 {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    };
    TimeDelta::try_milliseconds(rounded)
        .and_then(|delta| base.checked_add_signed(delta))
        .unwrap_or(saturated)
}
