//! List and learning-path output.

use std::path::Path;

use crate::domain::AppError;

pub fn run_list(root: &Path, detail: Option<String>) -> Result<(), AppError> {
    if let Some(course) = detail {
        let info = crate::app::api::course_detail_at(root, &course)?;
        println!("{}: {}", info.name, info.description);
        if !info.prerequisites.is_empty() {
            println!("\nPrerequisites:");
            for prereq in &info.prerequisites {
                let marker = if info.missing_prerequisites.contains(prereq) {
                    " (not in catalog)"
                } else {
                    ""
                };
                println!("  • {}{}", prereq, marker);
            }
        }
        if !info.required_by.is_empty() {
            println!("\nRequired by:");
            for dependent in &info.required_by {
                println!("  • {}", dependent);
            }
        }
    } else {
        let courses = crate::app::api::list_at(root)?;
        println!("Available courses:");
        for course in courses {
            println!("  {} - {}", course.name, course.description);
        }
    }
    Ok(())
}

pub fn run_path(root: &Path, user: &str) -> Result<(), AppError> {
    let path = crate::app::api::learning_path_at(root, user)?;

    if path.courses.is_empty() {
        println!("{} is not enrolled in any courses.", path.user);
        return Ok(());
    }

    println!("Learning path for {}:", path.user);
    for (i, course) in path.courses.iter().enumerate() {
        let marker = if course.is_unknown() { " (not in catalog)" } else { "" };
        println!("  {}. {}{}", i + 1, course.id, marker);
    }
    Ok(())
}
