use chrono::Datelike;

use crate::core::calendar::Timestamp;
use crate::core::scale_level::ScaleLevel;

/// Precision used when printing the instant under a focal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusLabelPattern {
    /// `HH:MM:SS`
    TimeSecond,
    /// `MM/DD HH:MM`
    MonthDayMinute,
    /// `YYYY/MM/DD HH:MM`
    DateMinute,
}

impl FocusLabelPattern {
    #[must_use]
    pub fn for_level(level: ScaleLevel) -> Self {
        match level {
            ScaleLevel::Minute
            | ScaleLevel::FiveMinutes
            | ScaleLevel::TenMinutes
            | ScaleLevel::HalfHour
            | ScaleLevel::Hour => Self::TimeSecond,
            ScaleLevel::Day | ScaleLevel::Week => Self::MonthDayMinute,
            ScaleLevel::Month
            | ScaleLevel::Quarter
            | ScaleLevel::Year
            | ScaleLevel::Decade
            | ScaleLevel::Century => Self::DateMinute,
        }
    }

    fn format_str(self) -> &'static str {
        match self {
            Self::TimeSecond => "%H:%M:%S",
            Self::MonthDayMinute => "%m/%d %H:%M",
            Self::DateMinute => "%Y/%m/%d %H:%M",
        }
    }
}

/// Text for the instant under the pinch centroid, detailed enough to show
/// sub-unit movement at `level`.
#[must_use]
pub fn format_focus_label(level: ScaleLevel, time: Timestamp) -> String {
    time.format(FocusLabelPattern::for_level(level).format_str())
        .to_string()
}

/// Short name of the period containing `time` at `level`
/// (`"2026/10"`, `"Q4 2026"`, `"2020s"`, ...).
#[must_use]
pub fn format_period_label(level: ScaleLevel, time: Timestamp) -> String {
    match level {
        ScaleLevel::Minute
        | ScaleLevel::FiveMinutes
        | ScaleLevel::TenMinutes
        | ScaleLevel::HalfHour
        | ScaleLevel::Hour => time.format("%H:%M").to_string(),
        ScaleLevel::Day | ScaleLevel::Week => time.format("%m/%d").to_string(),
        ScaleLevel::Month => time.format("%Y/%m").to_string(),
        ScaleLevel::Quarter => format!("Q{} {}", time.month0() / 3 + 1, time.year()),
        ScaleLevel::Year => time.year().to_string(),
        ScaleLevel::Decade => format!("{}s", time.year().div_euclid(10) * 10),
        ScaleLevel::Century => format!("{}s", time.year().div_euclid(100) * 100),
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusLabelPattern, format_focus_label, format_period_label};
    use crate::core::ScaleLevel;
    use chrono::NaiveDate;

    fn sample() -> crate::core::Timestamp {
        NaiveDate::from_ymd_opt(2026, 8, 4)
            .expect("date")
            .and_hms_opt(9, 5, 7)
            .expect("time")
    }

    #[test]
    fn focus_label_precision_follows_level() {
        assert_eq!(format_focus_label(ScaleLevel::Hour, sample()), "09:05:07");
        assert_eq!(format_focus_label(ScaleLevel::Week, sample()), "08/04 09:05");
        assert_eq!(
            format_focus_label(ScaleLevel::Century, sample()),
            "2026/08/04 09:05"
        );
        assert_eq!(
            FocusLabelPattern::for_level(ScaleLevel::Day),
            FocusLabelPattern::MonthDayMinute
        );
    }

    #[test]
    fn period_labels_name_the_containing_period() {
        assert_eq!(format_period_label(ScaleLevel::Quarter, sample()), "Q3 2026");
        assert_eq!(format_period_label(ScaleLevel::Decade, sample()), "2020s");
        assert_eq!(format_period_label(ScaleLevel::Century, sample()), "2000s");
        assert_eq!(format_period_label(ScaleLevel::Month, sample()), "2026/08");
    }
}
