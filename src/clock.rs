use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use crate::lesson::TimeOfDay;

/// Source of "now", read only at the edge of the program
#[derive(Clone, Copy, Debug, Default)]
pub enum Clock {
    #[default]
    System,
    /// Given date, system time of day
    Dated(NaiveDate),
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Current local date and time according to the clock
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System => Local::now().naive_local(),
            Self::Dated(date) => date.and_time(Local::now().time()),
            Self::Fixed(t) => *t,
        }
    }

    /// Today, at midnight
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Minutes elapsed since midnight
    pub fn minutes(&self) -> TimeOfDay {
        let now = self.now();
        // At most 1439, always fits
        i32::try_from(now.hour() * 60 + now.minute()).unwrap_or(TimeOfDay::MAX)
    }
}
