//! Configuration loading from the working root.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, CourseplanConfig};

/// Load `courseplan.toml` from `root`, or defaults when it does not exist.
pub fn load_config(root: &Path) -> Result<CourseplanConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "loaded configuration");
            parse_config_content(&content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(CourseplanConfig::default()),
        Err(err) => Err(err.into()),
    }
}
