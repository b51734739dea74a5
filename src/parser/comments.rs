//! Comment stripping for env file lines.

/// Remove inline comments and surrounding whitespace from a line.
///
/// A comment begins at the first unescaped `#`. A `#` preceded by an odd
/// number of consecutive backslashes is literal; the scan is a single
/// left-to-right pass over an "escaped" flag that toggles on backslash and
/// resets after the next character. Backslashes themselves are preserved
/// verbatim — this routine only decides where the line ends, it does not
/// interpret escape sequences.
///
/// A line that is empty after trimming, or whose first non-whitespace
/// character is `#`, yields an empty string.
pub fn strip_comments(line: &str) -> String {
    let stripped = line.trim();
    if stripped.is_empty() || stripped.starts_with('#') {
        return String::new();
    }

    let mut escaped = false;
    let mut result = String::with_capacity(stripped.len());
    for ch in stripped.chars() {
        if ch == '\\' && !escaped {
            escaped = true;
            result.push(ch);
            continue;
        }
        if ch == '#' && !escaped {
            break;
        }
        escaped = false;
        result.push(ch);
    }

    result.trim().to_string()
}
