//! Trimming a character set from either end of a string.

/// ASCII whitespace in the C locale, vertical tab included.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Remove leading and trailing characters found in `chars`.
///
/// An empty `chars` strips whitespace.
///
/// # Examples
///
/// ```
/// use textops::strip;
///
/// assert_eq!(strip("  a b  ", ""), "a b");
/// assert_eq!(strip("//a/b//", "/"), "a/b");
/// assert_eq!(strip("\\/x/\\", "/\\"), "x");
/// ```
#[must_use]
pub fn strip<'a>(s: &'a str, chars: &str) -> &'a str {
    rstrip(lstrip(s, chars), chars)
}

/// Remove leading characters found in `chars`.
///
/// # Examples
///
/// ```
/// use textops::lstrip;
///
/// assert_eq!(lstrip("\\\\a\\b", "\\"), "a\\b");
/// assert_eq!(lstrip("\t x", ""), "x");
/// ```
#[must_use]
pub fn lstrip<'a>(s: &'a str, chars: &str) -> &'a str {
    if chars.is_empty() {
        s.trim_start_matches(is_space)
    } else {
        s.trim_start_matches(|c: char| chars.contains(c))
    }
}

/// Remove trailing characters found in `chars`.
///
/// # Examples
///
/// ```
/// use textops::rstrip;
///
/// assert_eq!(rstrip("/a/b///", "/"), "/a/b");
/// assert_eq!(rstrip("///", "/"), "");
/// ```
#[must_use]
pub fn rstrip<'a>(s: &'a str, chars: &str) -> &'a str {
    if chars.is_empty() {
        s.trim_end_matches(is_space)
    } else {
        s.trim_end_matches(|c: char| chars.contains(c))
    }
}
