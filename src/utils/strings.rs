//! String utility functions

/// Split a string into lines, preserving trailing empty lines (unlike `.lines()`).
///
/// A single trailing `\n` is a line terminator, not an empty line. Carriage
/// returns are kept as part of the line so rewritten files stay byte-identical.
///
/// ```
/// use aliaser::utils::strings::split_lines_preserve_trailing;
///
/// assert_eq!(split_lines_preserve_trailing("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines_preserve_trailing("a\n"), vec!["a"]);
/// assert_eq!(split_lines_preserve_trailing("a\n\n"), vec!["a", ""]);
/// assert_eq!(split_lines_preserve_trailing(""), Vec::<&str>::new());
/// ```
pub fn split_lines_preserve_trailing(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<&str> = s.split('\n').collect();

    // split('\n') yields an empty string after the final terminator
    if s.ends_with('\n') && result.last() == Some(&"") {
        result.pop();
    }

    result
}

/// Truncate a string to fit within `max_width` chars, adding "..." if truncated
pub fn truncate_display(s: &str, max_width: usize) -> String {
    let s = s.replace('\n', "\\n");

    if s.chars().count() <= max_width {
        s
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}
