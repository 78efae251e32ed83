use std::{collections::HashMap, fmt::Write, fs, path::Path, sync::LazyLock};

use crate::{
    error::Error,
    lesson::{self, TimeOfDay},
    utils::{self, models::Position},
    week::{WeekLabel, WEEKDAY_NAMES},
};

pub mod models;

/// Lowercased canonical weekday names to their ordinal
static WEEKDAYS: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    WEEKDAY_NAMES
        .iter()
        .enumerate()
        .map(|(ordinal, name)| (name.to_lowercase(), ordinal))
        .collect()
});

/// Ordinal of a weekday name, ignoring case. Sunday is never matched.
pub fn weekday_ordinal(name: &str) -> Option<usize> {
    WEEKDAYS.get(&name.trim().to_lowercase()).copied()
}

/// Read the schedule data from a JSON file
pub fn load(path: &Path) -> Result<models::ScheduleData, Error> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let data = parse(&raw)?;
    log::info!("{} categories loaded from {}", data.len(), path.display());

    Ok(data)
}

/// Parse the schedule data from JSON
pub fn parse(raw: &str) -> Result<models::ScheduleData, Error> {
    let data: models::ScheduleData = serde_json::from_str(raw)?;
    if data.is_empty() {
        return Err(Error::Empty);
    }

    Ok(data)
}

/// Select the days of `week` for a group, Monday to Saturday
///
/// Days without lessons, or missing from the data, are left out.
pub fn project(
    data: &models::ScheduleData,
    group: &models::GroupRef,
    week: WeekLabel,
) -> Vec<models::Day> {
    let Some(schedule) = data
        .get(&group.category)
        .and_then(|category| category.get(&group.course))
        .and_then(|course| course.get(&group.name))
        .and_then(|weeks| weeks.get(week.key()))
    else {
        log::debug!("no data for {} on week {}", group.name, week.key());
        return vec![];
    };

    // The first spelling of a day in the file wins
    let mut slots: [Option<&Vec<models::RawLesson>>; WEEKDAY_NAMES.len()] = Default::default();
    for (key, lessons) in schedule {
        let Some(ordinal) = weekday_ordinal(key) else {
            log::debug!("ignoring unknown weekday `{key}`");
            continue;
        };
        if slots[ordinal].is_none() {
            slots[ordinal] = Some(lessons);
        }
    }

    let days: Vec<_> = slots
        .into_iter()
        .enumerate()
        .filter_map(|(ordinal, lessons)| {
            let lessons = lessons.filter(|lessons| !lessons.is_empty())?;
            Some(models::Day {
                name: WEEKDAY_NAMES[ordinal],
                ordinal,
                lessons: lessons
                    .iter()
                    .map(|lesson| models::Lesson {
                        num: lesson.num,
                        time: lesson.time.clone(),
                        place: lesson.text.clone(),
                    })
                    .collect(),
            })
        })
        .collect();

    log::debug!("{} days on week {} for {}", days.len(), week.key(), group.name);

    days
}

/// What to show and when it is
pub struct View<'a> {
    pub group: &'a models::GroupRef,
    /// Week being displayed
    pub shown: WeekLabel,
    /// Week in effect today
    pub current: WeekLabel,
    /// Monday-first ordinal of today
    pub today: usize,
    /// Minutes since midnight
    pub now: TimeOfDay,
    pub days: &'a [models::Day],
}

// Width of the progress bar of the running lesson
const BAR: usize = 20;
// Minimal inner width of a day card
const MIN_WIDTH: usize = 40;

/// Render the timetable
pub fn render(view: &View) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({} • {})",
        view.group.name,
        view.group.category,
        utils::course_label(&view.group.course)
    );
    let _ = write!(out, "{}", view.shown);
    if view.shown == view.current {
        let _ = writeln!(out, " • текущая");
    } else {
        let _ = writeln!(out, " • сейчас {}", view.current);
    }
    out.push('\n');

    if view.days.is_empty() {
        let _ = writeln!(out, "Нет занятий");
        let _ = writeln!(out, "Расписание для этой недели пусто");
        return out;
    }

    let live = view.shown == view.current;
    for day in view.days {
        let is_today = live && day.ordinal == view.today;
        out.push_str(&render_day(day, is_today, view.now));
    }

    out
}

/// Render the card of a day
fn render_day(day: &models::Day, is_today: bool, now: TimeOfDay) -> String {
    let count = day.lessons.len();
    let title = if is_today {
        format!("{} • сегодня", day.name)
    } else {
        day.name.to_owned()
    };
    let counter = format!("{count} {}", utils::pair_word(count));

    let mut rows = vec![];
    for item in &day.lessons {
        rows.push(format!("{:>2}  {}  {}", item.num, item.time, item.place));

        if !is_today {
            continue;
        }
        match lesson::parse(&item.time) {
            Some(range) => {
                let state = lesson::evaluate(range, now);
                if state.is_active {
                    let progress = state.clamped_progress();
                    rows.push(format!(
                        "    ▶ {} {:>3.0}%",
                        utils::progress_bar(progress, BAR),
                        progress * 100.
                    ));
                }
            }
            None => log::warn!("can't read time range `{}` of {}", item.time, day.name),
        }
    }

    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .chain([title.chars().count() + counter.chars().count() + 1, MIN_WIDTH])
        .max()
        .unwrap_or(MIN_WIDTH);

    let mut out = String::new();
    out.push_str(&utils::line_table(width, &Position::Top));
    out.push_str(&utils::row_table(
        &utils::spread(&title, &counter, width),
        width,
    ));
    out.push_str(&utils::line_table(width, &Position::Middle));
    for row in &rows {
        out.push_str(&utils::row_table(row, width));
    }
    out.push_str(&utils::line_table(width, &Position::Bottom));

    out
}
