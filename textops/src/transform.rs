//! Repetition and substring replacement.

/// Repeat `s` `n` times; a non-positive `n` yields the empty string.
///
/// # Examples
///
/// ```
/// use textops::repeat;
///
/// assert_eq!(repeat("/", 2), "//");
/// assert_eq!(repeat("ab", 0), "");
/// assert_eq!(repeat("ab", -3), "");
/// ```
#[must_use]
pub fn repeat(s: &str, n: isize) -> String {
    usize::try_from(n).map_or_else(|_| String::new(), |n| s.repeat(n))
}

/// Replace non-overlapping occurrences of `old` with `new`, left to right.
///
/// With `count` set, at most that many replacements are made. An empty
/// `old` matches before every character and at the end.
///
/// # Examples
///
/// ```
/// use textops::replace;
///
/// assert_eq!(replace("a/b/c", "/", "\\", None), "a\\b\\c");
/// assert_eq!(replace("a/b/c", "/", "\\", Some(1)), "a\\b/c");
/// assert_eq!(replace("ab", "", "-", None), "-a-b-");
/// ```
#[must_use]
pub fn replace(s: &str, old: &str, new: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => s.replacen(old, new, n),
        None => s.replace(old, new),
    }
}
