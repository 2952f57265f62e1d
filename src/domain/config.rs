//! Configuration loaded from `courseplan.toml`.

use std::path::PathBuf;

use serde::Deserialize;

use super::{AppError, ResolverOptions};

/// Name of the optional configuration file in the working root.
pub const CONFIG_FILE: &str = "courseplan.toml";

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseplanConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub resolver: ResolverSettings,
    #[serde(default)]
    pub enrollment: EnrollmentSettings,
}

/// Where the course catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSettings {
    /// Catalog JSON file, relative to the root.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("courses.json")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverSettings {
    /// Abort resolution on dangling prerequisites.
    #[serde(default)]
    pub strict_unknown_courses: bool,
}

impl ResolverSettings {
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions { strict_unknown_courses: self.strict_unknown_courses }
    }
}

/// Where per-user enrollment lists are stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrollmentSettings {
    /// Directory holding `<user>_enrollments.json`, relative to the root.
    #[serde(default = "default_enrollment_dir")]
    pub dir: PathBuf,
}

impl Default for EnrollmentSettings {
    fn default() -> Self {
        Self { dir: default_enrollment_dir() }
    }
}

fn default_enrollment_dir() -> PathBuf {
    PathBuf::from(".")
}

impl CourseplanConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(AppError::config_error("catalog.path must not be empty"));
        }
        if self.enrollment.dir.as_os_str().is_empty() {
            return Err(AppError::config_error("enrollment.dir must not be empty"));
        }
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<CourseplanConfig, AppError> {
    let config: CourseplanConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
