//! Index clamping shared by every bounded primitive.

/// Sentinel `end` index meaning "through the end of the string".
pub const END: isize = isize::MAX;

/// Clamp a signed `start`/`end` pair against a string of `len` bytes.
///
/// `end` ends up in `0..=len`. `start` is never negative but may still exceed
/// `end` or `len`; callers decide what an empty or inverted window means.
pub(crate) fn adjust(start: isize, end: isize, len: usize) -> (usize, usize) {
    let len_signed = isize::try_from(len).unwrap_or(isize::MAX);

    let end = if end > len_signed {
        len_signed
    } else if end < 0 {
        (end + len_signed).max(0)
    } else {
        end
    };

    let start = if start < 0 {
        (start + len_signed).max(0)
    } else {
        start
    };

    (start.unsigned_abs(), end.unsigned_abs())
}

/// Round a byte offset down to the nearest character boundary of `s`.
pub(crate) fn floor_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    // 0 is always a boundary
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Clamp `start`/`end` against `s` and round both down to character
/// boundaries. `None` when the clamped window is inverted.
pub(crate) fn window(s: &str, start: isize, end: isize) -> Option<(usize, usize)> {
    let (start, end) = adjust(start, end, s.len());
    if start > end {
        return None;
    }
    Some((floor_boundary(s, start), floor_boundary(s, end)))
}
