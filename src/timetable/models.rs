use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::Deserialize;

/// Lesson as stored in the schedule data
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawLesson {
    /// Position of the lesson in the day
    pub num: u32,

    /// Raw time range, i.e. `08:30 – 10:00`
    pub time: String,

    /// Free text: subject, teacher and room
    pub text: String,
}

/// Weekday name to the lessons of that day, in file order
pub type WeekSchedule = IndexMap<String, Vec<RawLesson>>;

/// Week key (`"1"` or `"2"`) to the schedule of that week
pub type GroupSchedule = HashMap<String, WeekSchedule>;

/// Group name to its schedule, in file order
pub type Course = IndexMap<String, GroupSchedule>;

/// Course name to its groups
pub type Category = BTreeMap<String, Course>;

/// Whole schedule: category, course, group, week, weekday
pub type ScheduleData = BTreeMap<String, Category>;

/// Group chosen by the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRef {
    pub category: String,
    pub course: String,
    pub name: String,
}

/// A lesson ready to be shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    /// Lesson's number in the day
    pub num: u32,

    /// Time range, as written in the source
    pub time: String,

    /// Subject, teacher and room
    pub place: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Day {
    /// Day's name
    pub name: &'static str,
    /// Monday-first ordinal of the day
    pub ordinal: usize,
    /// Ordered list of all the lessons of the day
    pub lessons: Vec<Lesson>,
}
