//! Bounded substring search and prefix/suffix tests.
//!
//! All searches run over bytes. Returned positions are byte offsets into the
//! original string, not into the searched window.

use crate::bounds::{window, END};

fn position(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rposition(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Find the lowest offset of `sub` in `s`.
///
/// # Examples
///
/// ```
/// use textops::find;
///
/// assert_eq!(find("a.b.c", "."), Some(1));
/// assert_eq!(find("abc", "x"), None);
/// assert_eq!(find("abc", ""), Some(0));
/// ```
#[must_use]
pub fn find(s: &str, sub: &str) -> Option<usize> {
    find_in(s, sub, 0, END)
}

/// Find the lowest offset of `sub` lying entirely within `s[start..end]`.
///
/// # Examples
///
/// ```
/// use textops::find_in;
///
/// assert_eq!(find_in("a.b.c", ".", 2, 5), Some(3));
/// assert_eq!(find_in("a.b.c", ".", 0, 1), None);
/// assert_eq!(find_in("abc", "", 4, 5), None);
/// ```
#[must_use]
pub fn find_in(s: &str, sub: &str, start: isize, end: isize) -> Option<usize> {
    let Some((start, end)) = window(s, start, end) else {
        return None;
    };
    position(&s.as_bytes()[start..end], sub.as_bytes()).map(|i| i + start)
}

/// Find the highest offset of `sub` in `s`.
///
/// # Examples
///
/// ```
/// use textops::rfind;
///
/// assert_eq!(rfind("a.b.c", "."), Some(3));
/// assert_eq!(rfind("abc", "x"), None);
/// assert_eq!(rfind("abc", ""), Some(3));
/// ```
#[must_use]
pub fn rfind(s: &str, sub: &str) -> Option<usize> {
    rfind_in(s, sub, 0, END)
}

/// Find the highest offset of `sub` lying entirely within `s[start..end]`.
///
/// # Examples
///
/// ```
/// use textops::rfind_in;
///
/// assert_eq!(rfind_in("a/b/c", "/", 0, 3), Some(1));
/// assert_eq!(rfind_in("a/b/c", "/", 2, -1), Some(3));
/// ```
#[must_use]
pub fn rfind_in(s: &str, sub: &str, start: isize, end: isize) -> Option<usize> {
    let Some((start, end)) = window(s, start, end) else {
        return None;
    };
    rposition(&s.as_bytes()[start..end], sub.as_bytes()).map(|i| i + start)
}

/// Count non-overlapping occurrences of `sub` in `s`.
///
/// An empty `sub` matches between every pair of bytes and at both ends.
///
/// # Examples
///
/// ```
/// use textops::count;
///
/// assert_eq!(count("a//b//c", "//"), 2);
/// assert_eq!(count("aaaa", "aa"), 2);
/// assert_eq!(count("abc", ""), 4);
/// ```
#[must_use]
pub fn count(s: &str, sub: &str) -> usize {
    count_in(s, sub, 0, END)
}

/// Count non-overlapping occurrences of `sub` within `s[start..end]`.
#[must_use]
pub fn count_in(s: &str, sub: &str, start: isize, end: isize) -> usize {
    let Some((start, end)) = window(s, start, end) else {
        return 0;
    };
    if sub.is_empty() {
        return end - start + 1;
    }

    let window = &s.as_bytes()[start..end];
    let needle = sub.as_bytes();
    let mut cursor = 0;
    let mut matches = 0;
    while let Some(i) = position(&window[cursor..], needle) {
        matches += 1;
        cursor += i + needle.len();
    }
    matches
}

/// Test whether `s` begins with `prefix`.
///
/// # Examples
///
/// ```
/// use textops::starts_with;
///
/// assert!(starts_with("//server", "//"));
/// assert!(starts_with("abc", ""));
/// assert!(!starts_with("", "/"));
/// ```
#[must_use]
pub fn starts_with(s: &str, prefix: &str) -> bool {
    starts_with_in(s, prefix, 0, END)
}

/// Test whether `s[start..end]` begins with `prefix`.
///
/// # Examples
///
/// ```
/// use textops::starts_with_in;
///
/// assert!(starts_with_in("c:/dir", "/", 2, 6));
/// assert!(!starts_with_in("c:/dir", "/dir", 2, 4));
/// assert!(!starts_with_in("abc", "", 4, 5));
/// ```
#[must_use]
pub fn starts_with_in(s: &str, prefix: &str, start: isize, end: isize) -> bool {
    let Some((start, end)) = window(s, start, end) else {
        return false;
    };
    let n = prefix.len();
    if end - start < n {
        return false;
    }
    &s.as_bytes()[start..start + n] == prefix.as_bytes()
}

/// Test whether `s` ends with `suffix`.
///
/// # Examples
///
/// ```
/// use textops::ends_with;
///
/// assert!(ends_with("c:", ":"));
/// assert!(ends_with("dir/", "/"));
/// assert!(!ends_with("", "/"));
/// ```
#[must_use]
pub fn ends_with(s: &str, suffix: &str) -> bool {
    ends_with_in(s, suffix, 0, END)
}

/// Test whether `s[start..end]` ends with `suffix`.
///
/// # Examples
///
/// ```
/// use textops::ends_with_in;
///
/// assert!(ends_with_in("a/b/c", "/", 0, 2));
/// assert!(!ends_with_in("a/b/c", "b/c", 3, 5));
/// ```
#[must_use]
pub fn ends_with_in(s: &str, suffix: &str, start: isize, end: isize) -> bool {
    let Some((start, end)) = window(s, start, end) else {
        return false;
    };
    let n = suffix.len();
    if end - start < n {
        return false;
    }
    &s.as_bytes()[end - n..end] == suffix.as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bounded() {
        assert_eq!(find_in("abcabc", "abc", 1, END), Some(3));
        assert_eq!(find_in("abcabc", "abc", 1, 5), None);
        assert_eq!(find_in("abcabc", "abc", -3, END), Some(3));
    }

    #[test]
    fn test_find_empty_haystack() {
        assert_eq!(find("", "a"), None);
        assert_eq!(find("", ""), Some(0));
    }

    #[test]
    fn test_find_empty_needle_bounds() {
        assert_eq!(find_in("abc", "", 3, END), Some(3));
        assert_eq!(find_in("abc", "", 2, 1), None);
    }

    #[test]
    fn test_rfind_bounded() {
        assert_eq!(rfind_in("abcabc", "abc", 0, 5), Some(0));
        assert_eq!(rfind_in("abcabc", "abc", 1, 5), None);
        assert_eq!(rfind_in("abcabc", "", 0, 4), Some(4));
    }

    #[test]
    fn test_rfind_not_found_is_none() {
        assert_eq!(rfind("path", "/"), None);
        assert_eq!(rfind("", "/"), None);
    }

    #[test]
    fn test_count() {
        assert_eq!(count("", "a"), 0);
        assert_eq!(count("", ""), 1);
        assert_eq!(count("a.b.c", "."), 2);
        assert_eq!(count_in("a.b.c", ".", 2, END), 1);
        assert_eq!(count_in("abc", "", 5, END), 0);
    }

    #[test]
    fn test_starts_with_bounds() {
        assert!(starts_with("///a", "//"));
        assert!(!starts_with("/a", "//"));
        assert!(starts_with_in("hello", "ll", 2, END));
        assert!(starts_with_in("hello", "lo", -2, END));
        assert!(!starts_with_in("hello", "ll", 2, 3));
        assert!(starts_with_in("hello", "", 5, END));
    }

    #[test]
    fn test_ends_with_bounds() {
        assert!(ends_with("a\\", "\\"));
        assert!(ends_with("abc", ""));
        assert!(ends_with_in("hello", "ell", 0, 4));
        assert!(ends_with_in("hello", "he", 0, -3));
        assert!(!ends_with_in("hello", "hello", 1, END));
        assert!(!ends_with_in("hello", "", 6, END));
    }

    #[test]
    fn test_offsets_inside_multibyte_char_round_down() {
        // 'é' occupies bytes 0..2
        let s = "é";
        assert_eq!(find_in(s, "", 1, END), Some(0));
        assert_eq!(rfind_in(s, "", 0, 1), Some(0));
        assert_eq!(rfind_in(s, "", 0, END), Some(2));
        assert_eq!(count_in(s, "", 1, END), 3);
        assert!(starts_with_in(s, "é", 1, END));
        assert!(!ends_with_in(s, "é", 0, 1));

        for start in 0..=3 {
            for end in 0..=3 {
                if let Some(i) = find_in(s, "", start, end) {
                    assert!(s.is_char_boundary(i));
                }
                if let Some(i) = rfind_in(s, "", start, end) {
                    assert!(s.is_char_boundary(i));
                }
            }
        }
    }
}
