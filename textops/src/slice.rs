//! Substring extraction with clamped indices.

use crate::bounds::{adjust, floor_boundary, END};

/// Extract `s[start..end]` using clamped, negative-capable indices.
///
/// Returns the empty string whenever the clamped `start` is not before the
/// clamped `end`.
///
/// # Examples
///
/// ```
/// use textops::{slice, END};
///
/// assert_eq!(slice("abcdef", 2, 4), "cd");
/// assert_eq!(slice("abcdef", 0, -1), "abcde");
/// assert_eq!(slice("abcdef", -2, END), "ef");
/// assert_eq!(slice("abcdef", 4, 2), "");
/// assert_eq!(slice("abc", 0, 99), "abc");
/// ```
#[must_use]
pub fn slice(s: &str, start: isize, end: isize) -> &str {
    let (start, end) = adjust(start, end, s.len());
    if start >= end {
        return "";
    }
    &s[floor_boundary(s, start)..floor_boundary(s, end)]
}

/// Extract everything from `start` to the end of `s`.
///
/// # Examples
///
/// ```
/// use textops::slice_from;
///
/// assert_eq!(slice_from("c:/dir", 2), "/dir");
/// assert_eq!(slice_from("abc", -1), "c");
/// assert_eq!(slice_from("abc", 7), "");
/// ```
#[must_use]
pub fn slice_from(s: &str, start: isize) -> &str {
    slice(s, start, END)
}
