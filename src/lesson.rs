use std::sync::LazyLock;

use regex::Regex;

/// Minutes since local midnight, 0 to 1439 expected but not clamped
pub type TimeOfDay = i32;

// hour => hours of the day | minute => minutes of the hour
static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<hour>\d+):(?P<minute>\d+)$").expect("valid clock regex"));

/// Start and end of a lesson
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonTimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Where the clock is relative to a lesson
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LessonActivityState {
    pub is_active: bool,
    /// Fraction of the lesson already elapsed, may leave [0, 1]
    pub progress: f64,
}

impl LessonActivityState {
    /// Progress bounded to [0, 1], for display
    pub fn clamped_progress(&self) -> f64 {
        self.progress.clamp(0.0, 1.0)
    }
}

/// Parse a `HH:MM` string to minutes since midnight
fn parse_clock(text: &str) -> Option<TimeOfDay> {
    let captures = CLOCK.captures(text.trim())?;
    let hours: TimeOfDay = captures.name("hour")?.as_str().parse().ok()?;
    let minutes: TimeOfDay = captures.name("minute")?.as_str().parse().ok()?;

    hours.checked_mul(60)?.checked_add(minutes)
}

/// Parse a lesson time range such as `08:30 – 10:00` or `08:30-10:00`
///
/// Ordering and bounds are not checked, an inverted range is kept as is
/// and will simply never be active.
pub fn parse(text: &str) -> Option<LessonTimeRange> {
    let normalized = text.replace('–', "-");
    let mut parts = normalized.split('-');

    let start = parse_clock(parts.next()?)?;
    let end = parse_clock(parts.next()?)?;

    if end < start {
        log::warn!("lesson ends before it starts: {text}");
    }

    Some(LessonTimeRange { start, end })
}

/// Evaluate a lesson against the current time
pub fn evaluate(range: LessonTimeRange, now: TimeOfDay) -> LessonActivityState {
    let is_active = now >= range.start && now <= range.end;

    let length = range.end - range.start;
    let progress = if length > 0 {
        f64::from(now - range.start) / f64::from(length)
    } else {
        0.0
    };

    LessonActivityState {
        is_active,
        progress,
    }
}
