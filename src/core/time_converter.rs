use crate::core::calendar::{
    CalendarPeriod, MILLIS_PER_DAY, MILLIS_PER_MINUTE, MILLIS_PER_WEEK, Timestamp,
    millis_between, offset_millis, start_of_day, start_of_week,
};
use crate::core::scale_level::ScaleLevel;

/// Unit index at which year, decade and century levels place the period
/// containing the reference instant.
///
/// Shared by both conversion directions and by the cross-level position
/// table; changing it shifts every coarse-level scroll offset uniformly.
pub const ORIGIN_BIAS: f64 = 10.0;

/// How unit indices map onto time for one level relative to a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
enum UnitFrame {
    /// Constant-length units counted from a fixed origin.
    Fixed { origin: Timestamp, unit_millis: i64 },
    /// Calendar periods of varying length; the period containing the
    /// reference sits at unit `bias`.
    Calendar {
        period: CalendarPeriod,
        origin_index: i64,
        bias: f64,
    },
}

fn unit_frame(level: ScaleLevel, reference_now: Timestamp) -> UnitFrame {
    let calendar = |period: CalendarPeriod, bias: f64| UnitFrame::Calendar {
        period,
        origin_index: period.index_of(reference_now),
        bias,
    };

    match level {
        ScaleLevel::Minute
        | ScaleLevel::FiveMinutes
        | ScaleLevel::TenMinutes
        | ScaleLevel::HalfHour
        | ScaleLevel::Hour => UnitFrame::Fixed {
            origin: start_of_day(reference_now),
            unit_millis: level.intraday_minutes().unwrap_or(60) * MILLIS_PER_MINUTE,
        },
        ScaleLevel::Day => UnitFrame::Fixed {
            origin: start_of_day(reference_now),
            unit_millis: MILLIS_PER_DAY,
        },
        ScaleLevel::Week => UnitFrame::Fixed {
            origin: start_of_week(reference_now),
            unit_millis: MILLIS_PER_WEEK,
        },
        ScaleLevel::Month => calendar(CalendarPeriod::Month, 0.0),
        ScaleLevel::Quarter => calendar(CalendarPeriod::Quarter, 0.0),
        ScaleLevel::Year => calendar(CalendarPeriod::Year, ORIGIN_BIAS),
        ScaleLevel::Decade => calendar(CalendarPeriod::Decade, ORIGIN_BIAS),
        ScaleLevel::Century => calendar(CalendarPeriod::Century, ORIGIN_BIAS),
    }
}

/// Absolute time at a fractional unit index of `level`.
///
/// The fractional part of a calendar unit is a proportional position inside
/// that period's actual length. Non-finite input maps to the level origin.
#[must_use]
pub fn units_to_time(level: ScaleLevel, units: f64, reference_now: Timestamp) -> Timestamp {
    match unit_frame(level, reference_now) {
        UnitFrame::Fixed {
            origin,
            unit_millis,
        } => {
            if !units.is_finite() {
                return origin;
            }
            offset_millis(origin, units * unit_millis as f64)
        }
        UnitFrame::Calendar {
            period,
            origin_index,
            bias,
        } => {
            let relative = if units.is_finite() { units - bias } else { 0.0 };
            let whole = relative.floor();
            let fraction = relative - whole;
            // `as` saturates; period stepping clamps the year range.
            let index = origin_index.saturating_add(whole as i64);
            period.instant_at(index, fraction)
        }
    }
}

/// Fractional unit index of `time` under `level`.
#[must_use]
pub fn time_to_units(level: ScaleLevel, time: Timestamp, reference_now: Timestamp) -> f64 {
    match unit_frame(level, reference_now) {
        UnitFrame::Fixed {
            origin,
            unit_millis,
        } => millis_between(origin, time) as f64 / unit_millis as f64,
        UnitFrame::Calendar {
            period,
            origin_index,
            bias,
        } => {
            let (index, fraction) = period.fraction_of(time);
            bias + (index - origin_index) as f64 + fraction
        }
    }
}
