use dialoguer::Select;

use crate::error::Error;
use crate::timetable::models::{GroupRef, ScheduleData};
use crate::utils::course_label;

/// Names asked on the command line, any of them may be missing
pub struct Wanted {
    pub category: Option<String>,
    pub course: Option<String>,
    pub group: Option<String>,
}

/// Find the group of the user, asking for what is missing
pub fn group(data: &ScheduleData, wanted: Wanted) -> Result<GroupRef, Error> {
    let category = if let Some(category) = wanted.category {
        category
    } else {
        let items: Vec<_> = data.keys().cloned().collect();
        choose("Выберите направление", items, str::to_owned)?
    };
    let Some(courses) = data.get(&category) else {
        return Err(Error::UnknownCategory(category));
    };

    let course = if let Some(course) = wanted.course {
        course
    } else {
        let items: Vec<_> = courses.keys().cloned().collect();
        choose("Выберите курс", items, course_label)?
    };

    resolve(data, &category, &course, wanted.group.as_deref())
}

/// Check a group exists, defaulting to the first group of the course
pub fn resolve(
    data: &ScheduleData,
    category: &str,
    course: &str,
    group: Option<&str>,
) -> Result<GroupRef, Error> {
    let courses = data
        .get(category)
        .ok_or_else(|| Error::UnknownCategory(category.to_owned()))?;
    let groups = courses.get(course).ok_or_else(|| Error::UnknownCourse {
        category: category.to_owned(),
        course: course.to_owned(),
    })?;

    // The group listed first in the file is the default
    let found = match group {
        Some(name) => groups.get_key_value(name),
        None => groups.first(),
    };
    let Some((name, _)) = found else {
        return Err(Error::UnknownGroup {
            category: category.to_owned(),
            course: course.to_owned(),
            group: group.unwrap_or_default().to_owned(),
        });
    };

    Ok(GroupRef {
        category: category.to_owned(),
        course: course.to_owned(),
        name: name.clone(),
    })
}

/// Ask the user to pick one of `items`
fn choose(prompt: &str, items: Vec<String>, label: fn(&str) -> String) -> Result<String, Error> {
    let labels: Vec<_> = items.iter().map(|item| label(item)).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels[..])
        .default(0)
        .interact()?;

    Ok(items.into_iter().nth(selection).unwrap_or_default())
}
