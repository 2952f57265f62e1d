/// Checks that a string is safe to use as a file name stem.
///
/// Rejects:
/// - Empty strings
/// - Path separators (/, \)
/// - "." or ".."
/// - Characters other than alphanumerics, '-', '_', or (optionally) '.'
pub fn validate_identifier(id: &str, allow_dots: bool) -> bool {
    if id.is_empty() || id == "." || id == ".." {
        return false;
    }
    if id.contains(['/', '\\']) {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || (allow_dots && c == '.'))
}
