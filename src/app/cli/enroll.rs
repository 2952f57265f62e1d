//! Enroll command implementation.

use std::path::Path;

use dialoguer::Select;

use crate::app::api::{CourseSummary, EnrollOutcome};
use crate::domain::AppError;

pub fn run_enroll(
    root: &Path,
    user: &str,
    course: Option<String>,
    strict: bool,
) -> Result<(), AppError> {
    let Some(outcome) = enroll_selected(root, user, course, strict, prompt_course)? else {
        println!("Enrollment cancelled");
        return Ok(());
    };

    for entry in &outcome.newly_enrolled {
        println!("Enrolled in {}", entry);
    }
    if outcome.newly_enrolled.is_empty() {
        println!(
            "✅ {} is already enrolled in {} and its prerequisites",
            outcome.user, outcome.resolution.target
        );
    } else {
        println!("✅ Enrolled {} in {} course(s)", outcome.user, outcome.newly_enrolled.len());
    }
    Ok(())
}

/// Enroll in `course`, or in the course `pick` chooses when none was given.
///
/// Returns `None` when the picker is dismissed; nothing is written then.
fn enroll_selected<P>(
    root: &Path,
    user: &str,
    course: Option<String>,
    strict: bool,
    pick: P,
) -> Result<Option<EnrollOutcome>, AppError>
where
    P: FnOnce(&[CourseSummary]) -> Result<Option<usize>, AppError>,
{
    let course = match course {
        Some(value) => value,
        None => {
            let courses = crate::app::api::list_at(root)?;
            if courses.is_empty() {
                return Err(AppError::config_error("The course catalog is empty"));
            }
            match pick(&courses)?.and_then(|index| courses.get(index)) {
                Some(selected) => selected.name.clone(),
                None => return Ok(None),
            }
        }
    };

    crate::app::api::enroll_at(root, user, &course, strict).map(Some)
}

fn prompt_course(courses: &[CourseSummary]) -> Result<Option<usize>, AppError> {
    let items: Vec<String> =
        courses.iter().map(|c| format!("{} - {}", c.name, c.description)).collect();
    Select::new()
        .with_prompt("Select course to enroll in")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select course: {}", err)))
}
