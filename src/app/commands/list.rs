//! List command - shows the course catalog.

use crate::app::AppContext;
use crate::domain::{AppError, CourseId};
use crate::ports::{CatalogSource, EnrollmentStore};

/// Summary information for a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub name: String,
    pub description: String,
    pub prerequisites: Vec<String>,
}

/// Detailed information for a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub name: String,
    pub description: String,
    pub prerequisites: Vec<String>,
    /// Direct prerequisites that have no catalog record.
    pub missing_prerequisites: Vec<String>,
    /// Courses that list this one as a direct prerequisite.
    pub required_by: Vec<String>,
}

/// Execute the list command.
///
/// Returns every course in catalog order.
pub fn execute<C: CatalogSource, E: EnrollmentStore>(
    ctx: &AppContext<C, E>,
) -> Result<Vec<CourseSummary>, AppError> {
    let catalog = ctx.load_catalog()?;

    Ok(catalog
        .registry()
        .iter()
        .map(|record| CourseSummary {
            name: record.id.to_string(),
            description: record.display_description().to_string(),
            prerequisites: record.prerequisites.iter().map(CourseId::to_string).collect(),
        })
        .collect())
}

/// Execute the list --detail command.
pub fn execute_detail<C: CatalogSource, E: EnrollmentStore>(
    ctx: &AppContext<C, E>,
    course: &str,
) -> Result<CourseDetail, AppError> {
    let catalog = ctx.load_catalog()?;
    let registry = catalog.registry();
    let record =
        registry.lookup(course).ok_or_else(|| AppError::UnknownCourse(CourseId::from(course)))?;

    let graph = catalog.graph();
    let required_by = graph
        .node(course)
        .map(|node| graph.dependents(node).iter().map(|&d| graph.id(d).to_string()).collect())
        .unwrap_or_default();

    Ok(CourseDetail {
        name: record.id.to_string(),
        description: record.display_description().to_string(),
        prerequisites: record.prerequisites.iter().map(CourseId::to_string).collect(),
        missing_prerequisites: record
            .prerequisites
            .iter()
            .filter(|p| !registry.contains(p.as_str()))
            .map(CourseId::to_string)
            .collect(),
        required_by,
    })
}
