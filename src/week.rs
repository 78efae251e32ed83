use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

/// Canonical day names used in the schedule, Monday to Saturday
pub const WEEKDAY_NAMES: [&str; 6] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
];

/// One of the two alternating weekly schedules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeekLabel {
    First,
    Second,
}

impl WeekLabel {
    /// Key used by the schedule data for this week
    pub fn key(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
        }
    }

    /// The other week
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} неделя", self.key())
    }
}

impl FromStr for WeekLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::First),
            "2" => Ok(Self::Second),
            other => Err(format!("unknown week `{other}`, expected 1 or 2")),
        }
    }
}

/// September 1 of the academic year `date` belongs to
pub fn academic_anchor(date: NaiveDate) -> NaiveDate {
    // From september to december the year already started
    let year = if date.month() >= 9 {
        date.year()
    } else {
        date.year() - 1
    };

    NaiveDate::from_ymd_opt(year, 9, 1).unwrap_or(NaiveDate::MIN)
}

/// Monday of the week holding the academic anchor, first day of week 1
pub fn reference_monday(date: NaiveDate) -> NaiveDate {
    let anchor = academic_anchor(date);
    let offset = u64::from(anchor.weekday().num_days_from_monday());

    anchor.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

/// Which of the two weeks is in effect on `date`
pub fn resolve_week_label(date: NaiveDate) -> WeekLabel {
    let monday = reference_monday(date);
    let diff_days = (date - monday).num_days();
    let week_index = diff_days.div_euclid(7);

    log::debug!("reference monday {monday}, {diff_days} days ago, week index {week_index}");

    if week_index % 2 == 0 {
        WeekLabel::First
    } else {
        WeekLabel::Second
    }
}

/// Convert a weekday numbered from sunday (0) to a monday-first ordinal
pub fn ordinal_from_sunday(native: u32) -> usize {
    match native {
        0 => 6,
        n => n as usize - 1,
    }
}

/// Monday-first ordinal (0-6) of `date`
pub fn resolve_day_ordinal(date: NaiveDate) -> usize {
    ordinal_from_sunday(date.weekday().num_days_from_sunday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_follows_academic_year() {
        assert_eq!(academic_anchor(ymd(2025, 9, 1)), ymd(2025, 9, 1));
        assert_eq!(academic_anchor(ymd(2025, 12, 31)), ymd(2025, 9, 1));
        assert_eq!(academic_anchor(ymd(2026, 1, 1)), ymd(2025, 9, 1));
        assert_eq!(academic_anchor(ymd(2026, 8, 31)), ymd(2025, 9, 1));
    }

    #[test]
    fn reference_monday_is_on_or_before_anchor() {
        // 2025-09-01 is a monday
        assert_eq!(reference_monday(ymd(2025, 10, 1)), ymd(2025, 9, 1));
        // 2024-09-01 is a sunday
        assert_eq!(reference_monday(ymd(2024, 10, 1)), ymd(2024, 8, 26));
        // 2026-09-01 is a tuesday
        assert_eq!(reference_monday(ymd(2026, 9, 1)), ymd(2026, 8, 31));
    }

    #[test]
    fn september_first_is_always_first_week() {
        for year in 1990..2100 {
            assert_eq!(resolve_week_label(ymd(year, 9, 1)), WeekLabel::First);
        }
    }

    #[test]
    fn reference_monday_is_first_week() {
        for year in 1990..2100 {
            let september = ymd(year, 9, 1);
            let monday = reference_monday(september);

            // Days of that week still in august belong to the previous
            // academic year, only check from september 1
            for day in 0..7 {
                let date = monday + Days::new(day);
                if date >= september {
                    assert_eq!(resolve_week_label(date), WeekLabel::First, "{date}");
                }
            }
            assert_eq!(resolve_week_label(monday + Days::new(7)), WeekLabel::Second);
        }
    }

    #[test]
    fn august_reference_monday_belongs_to_previous_year() {
        // Reference mondays 2023-08-28 and 2024-08-26 are 364 days apart
        assert_eq!(reference_monday(ymd(2024, 9, 1)), ymd(2024, 8, 26));
        assert_eq!(resolve_week_label(ymd(2024, 8, 26)), WeekLabel::First);

        // Reference mondays 2019-08-26 and 2020-08-31 are 371 days apart,
        // so 2020-08-31 closes week 53 of the previous year
        assert_eq!(reference_monday(ymd(2020, 9, 1)), ymd(2020, 8, 31));
        assert_eq!(resolve_week_label(ymd(2020, 8, 31)), WeekLabel::Second);
        assert_eq!(resolve_week_label(ymd(2020, 9, 1)), WeekLabel::First);
    }

    #[test]
    fn labels_repeat_every_fourteen_days() {
        let mut date = ymd(2025, 9, 1);
        while date < ymd(2026, 8, 15) {
            assert_eq!(
                resolve_week_label(date),
                resolve_week_label(date + Days::new(14)),
                "{date}"
            );
            date = date + Days::new(1);
        }
    }

    #[test]
    fn labels_are_constant_within_a_week() {
        let monday = reference_monday(ymd(2025, 11, 5));
        for week in 0..40 {
            let start = monday + Days::new(week * 7);
            let expected = resolve_week_label(start);
            for day in 1..7 {
                assert_eq!(resolve_week_label(start + Days::new(day)), expected);
            }
            assert_ne!(resolve_week_label(start + Days::new(7)), expected);
        }
    }

    #[test]
    fn winter_dates_use_previous_anchor() {
        // 2025-09-01 is a monday, 2026-01-05 is 18 weeks later
        assert_eq!(resolve_week_label(ymd(2026, 1, 5)), WeekLabel::First);
        assert_eq!(resolve_week_label(ymd(2026, 1, 12)), WeekLabel::Second);
    }

    #[test]
    fn day_ordinal_is_monday_first() {
        assert_eq!(ordinal_from_sunday(0), 6);
        assert_eq!(ordinal_from_sunday(1), 0);
        assert_eq!(ordinal_from_sunday(6), 5);
        // 2025-09-01 is a monday, 2025-09-07 a sunday
        assert_eq!(resolve_day_ordinal(ymd(2025, 9, 1)), 0);
        assert_eq!(resolve_day_ordinal(ymd(2025, 9, 7)), 6);
    }

    #[test]
    fn week_label_keys() {
        assert_eq!("1".parse::<WeekLabel>(), Ok(WeekLabel::First));
        assert_eq!("2".parse::<WeekLabel>(), Ok(WeekLabel::Second));
        assert!("3".parse::<WeekLabel>().is_err());
        assert_eq!(WeekLabel::First.toggle(), WeekLabel::Second);
        assert_eq!(WeekLabel::Second.to_string(), "2 неделя");
    }
}
