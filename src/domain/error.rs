use std::io;

use thiserror::Error;

use super::{CourseId, Cycle};

/// Library-wide error type for courseplan operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Course has no record in the catalog.
    #[error("Unknown course '{0}'")]
    UnknownCourse(CourseId),

    /// Prerequisites of the requested course loop back on themselves.
    #[error("Circular dependency detected: {0}")]
    CycleDetected(Cycle),

    /// The same course identifier was registered twice.
    #[error("Course '{0}' is defined more than once in the catalog")]
    DuplicateCourse(CourseId),

    /// User name cannot be used to locate enrollment data.
    #[error(
        "Invalid user name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidUserName(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Interactive prompt failed or was cancelled.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidUserName(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::CycleDetected(_) | AppError::DuplicateCourse(_) => {
                io::ErrorKind::InvalidData
            }
            AppError::UnknownCourse(_) => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
        }
    }
}
