use super::AppError;
use super::validation::validate_identifier;

/// A validated user name.
///
/// Used as the stem of the per-user enrollment file, so it guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \, .., etc.)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate and create a new `UserName`.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_identifier(name, true) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidUserName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
