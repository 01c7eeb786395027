//! String predicates shared by constructors and guards.

/// Returns `true` when a string is empty or whitespace-only.
///
/// Required string fields reject blank values, not just empty ones, so a
/// document carrying `"  "` for an id fails the same way as one missing it.
///
/// # Examples
///
/// ```
/// use sheetforge_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   \t"));
/// assert!(!is_blank(" backpack "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_blank() {
        assert!(is_blank(""));
    }

    #[test]
    fn test_whitespace_is_blank() {
        assert!(is_blank(" "));
        assert!(is_blank("\t\n "));
    }

    #[test]
    fn test_content_is_not_blank() {
        assert!(!is_blank("x"));
        assert!(!is_blank(" x "));
    }
}
