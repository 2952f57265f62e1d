//! Resolve command output.

use std::path::Path;

use crate::domain::AppError;

pub fn run_resolve(root: &Path, course: &str, strict: bool, json: bool) -> Result<(), AppError> {
    let resolution = crate::app::api::resolve_at(root, course, strict)?;

    if json {
        let rendered = serde_json::to_string_pretty(&resolution)
            .map_err(|e| AppError::parse_error("resolution", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Study order for {}:", resolution.target);
    for (i, entry) in resolution.courses.iter().enumerate() {
        let marker = if entry.is_unknown() { " (not in catalog)" } else { "" };
        println!("  {}. {}{}", i + 1, entry.id, marker);
    }
    Ok(())
}
