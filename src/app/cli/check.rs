//! Check command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_check(root: &Path, strict: bool) -> Result<i32, AppError> {
    let outcome = crate::app::api::check_at(root, strict)?;
    let report = &outcome.report;

    for dangling in &report.dangling {
        let referenced_by: Vec<_> = dangling.referenced_by.iter().map(|id| id.as_str()).collect();
        println!(
            "⚠️  Missing prerequisite '{}' (required by: {})",
            dangling.missing,
            referenced_by.join(", ")
        );
    }
    if let Some(cycle) = &report.cycle {
        println!("❌ Circular dependency: {}", cycle);
    }

    if outcome.exit_code == 0 {
        println!("✅ Catalog OK ({} courses)", report.courses);
    } else {
        eprintln!("Catalog check failed");
    }
    Ok(outcome.exit_code)
}
