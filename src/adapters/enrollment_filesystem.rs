use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CourseId, UserName};
use crate::ports::EnrollmentStore;

/// Stores each user's enrollments as `<dir>/<user>_enrollments.json`.
#[derive(Debug, Clone)]
pub struct FilesystemEnrollmentStore {
    dir: PathBuf,
}

impl FilesystemEnrollmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Location of the enrollment file for `user`.
    pub fn path_for(&self, user: &UserName) -> PathBuf {
        self.dir.join(format!("{}_enrollments.json", user))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl EnrollmentStore for FilesystemEnrollmentStore {
    fn load(&self, user: &UserName) -> Result<Vec<CourseId>, AppError> {
        let path = self.path_for(user);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&content)
            .map_err(|e| AppError::parse_error(format!("enrollments ({})", path.display()), e))
    }

    fn save(&self, user: &UserName, courses: &[CourseId]) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(courses)
            .map_err(|e| AppError::parse_error("enrollments", e))?;
        // Write to a sibling file, then rename over the target atomically.
        let path = self.path_for(user);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}
