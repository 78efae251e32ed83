use crate::utils::models::{Position, TabChar};

pub mod models;

/// Russian word for "lesson pair" agreeing with `count`
pub fn pair_word(count: usize) -> &'static str {
    match count {
        1 => "пара",
        2..=4 => "пары",
        _ => "пар",
    }
}

/// Name showed for a course, numeric courses are years of study
pub fn course_label(course: &str) -> String {
    if !course.is_empty() && course.chars().all(|c| c.is_ascii_digit()) {
        format!("{course} курс")
    } else {
        course.to_owned()
    }
}

/// Bar filled up to `progress`, expected in [0, 1]
pub fn progress_bar(progress: f64, width: usize) -> String {
    let cells = progress.clamp(0.0, 1.0) * f64::from(u32::try_from(width).unwrap_or(u32::MAX));
    // Bounded by `width` after the clamp
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (cells.round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Put `left` and `right` at both ends of a `width` wide cell
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);

    format!("{left}{}{right}", " ".repeat(gap))
}

/// Horizontal line of a card, `width` being the inner width
pub fn line_table(width: usize, position: &Position) -> String {
    let (left, right) = match position {
        Position::Top => (TabChar::Jtl, TabChar::Jtr),
        Position::Middle => (TabChar::Jl, TabChar::Jr),
        Position::Bottom => (TabChar::Jbl, TabChar::Jbr),
    };

    format!(
        "{}{}{}\n",
        left.val(),
        TabChar::Bh.val().to_string().repeat(width + 2),
        right.val()
    )
}

/// Row of a card, `content` padded to `width`
pub fn row_table(content: &str, width: usize) -> String {
    let sep = TabChar::Bv.val();
    let padding = width.saturating_sub(content.chars().count());

    format!("{sep} {content}{} {sep}\n", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_word_agrees_with_count() {
        assert_eq!(pair_word(1), "пара");
        assert_eq!(pair_word(2), "пары");
        assert_eq!(pair_word(4), "пары");
        assert_eq!(pair_word(5), "пар");
        assert_eq!(pair_word(0), "пар");
        assert_eq!(pair_word(11), "пар");
    }

    #[test]
    fn numeric_courses_are_years() {
        assert_eq!(course_label("2"), "2 курс");
        assert_eq!(course_label("Магистратура"), "Магистратура");
        assert_eq!(course_label(""), "");
    }

    #[test]
    fn progress_bar_is_bounded() {
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(-1.0, 4), "░░░░");
        assert_eq!(progress_bar(3.0, 4), "████");
    }

    #[test]
    fn rows_and_lines_have_the_same_width() {
        let width = 12;
        let top = line_table(width, &Position::Top);
        let row = row_table("Среда", width);
        let spread_row = row_table(&spread("Среда", "1 пара", width), width);

        assert_eq!(top.chars().count(), row.chars().count());
        assert_eq!(row.chars().count(), spread_row.chars().count());
        assert!(top.starts_with('┌'));
        assert!(line_table(width, &Position::Bottom).starts_with('└'));
    }
}
