use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, CourseRegistry, default_registry, parse_catalog};
use crate::ports::CatalogSource;

/// Catalog read from a JSON file, falling back to the built-in catalog when
/// the file does not exist.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<CourseRegistry, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let registry = parse_catalog(&content).map_err(|err| match err {
                    AppError::ParseError { what, details } => AppError::ParseError {
                        what: format!("{} ({})", what, self.path.display()),
                        details,
                    },
                    other => other,
                })?;
                debug!(path = %self.path.display(), courses = registry.len(), "loaded catalog");
                Ok(registry)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file not found, using default catalog");
                default_registry()
            }
            Err(err) => Err(err.into()),
        }
    }
}
