//! Path decomposition: drive, head/tail and root/extension partitions.
//!
//! These functions cut a path into two borrowed parts without copying. They
//! are total: any string, including the empty string, has a partition.

use textops::{lstrip, rfind, slice, slice_from};

use super::syntax::Syntax;
use super::types::{DriveSplit, HeadTail, RootExt};

/// Split a path into a drive specification and the rest.
///
/// A drive is recognized only when the regime has a drive marker and it is
/// the second character of the path. UNC prefixes are not drives.
///
/// # Examples
///
/// ```
/// use pathops::path::decompose::splitdrive;
/// use pathops::path::syntax::{POSIX, WINDOWS};
///
/// assert_eq!(splitdrive(&WINDOWS, "c:/x").into_pair(), ("c:", "/x"));
/// assert_eq!(splitdrive(&WINDOWS, "\\\\srv\\share").into_pair(), ("", "\\\\srv\\share"));
/// assert_eq!(splitdrive(&POSIX, "c:/x").into_pair(), ("", "c:/x"));
/// ```
#[must_use]
pub fn splitdrive<'a>(syntax: &Syntax, path: &'a str) -> DriveSplit<'a> {
    match syntax.drive_marker {
        Some(marker) if slice(path, 1, 2) == marker => DriveSplit {
            drive: slice(path, 0, 2),
            rest: slice_from(path, 2),
        },
        _ => DriveSplit {
            drive: "",
            rest: path,
        },
    }
}

/// Split a path before its final segment.
///
/// Trailing separators are removed from the head unless the head consists
/// of nothing but separators (a root). Under a regime with drives, the drive
/// is set aside first and stays at the front of the head.
///
/// # Examples
///
/// ```
/// use pathops::path::decompose::split;
/// use pathops::path::syntax::{POSIX, WINDOWS};
///
/// assert_eq!(split(&POSIX, "/a/b").into_pair(), ("/a", "b"));
/// assert_eq!(split(&POSIX, "//").into_pair(), ("//", ""));
/// assert_eq!(split(&WINDOWS, "c:\\a\\\\b").into_pair(), ("c:\\a", "b"));
/// ```
#[must_use]
pub fn split<'a>(syntax: &Syntax, path: &'a str) -> HeadTail<'a> {
    let DriveSplit { drive, rest } = splitdrive(syntax, path);

    let cut = syntax.last_sep(rest).map_or(0, |i| i + 1);
    let (head, tail) = rest.split_at(cut);

    let trimmed = syntax.trim_trailing_seps(head);
    let head = if trimmed.is_empty() { head } else { trimmed };

    // drive and head are adjacent, so together they are a prefix of path
    HeadTail {
        head: &path[..drive.len() + head.len()],
        tail,
    }
}

/// Split a path before its extension.
///
/// The extension starts at the last dot of the final segment, provided some
/// character other than a dot precedes it in that segment. Names made only
/// of leading dots (`.profile`, `..`) have no extension.
///
/// # Examples
///
/// ```
/// use pathops::path::decompose::splitext;
/// use pathops::path::syntax::{POSIX, WINDOWS};
///
/// assert_eq!(splitext(&POSIX, "a/b.txt").into_pair(), ("a/b", ".txt"));
/// assert_eq!(splitext(&POSIX, ".cshrc").into_pair(), (".cshrc", ""));
/// assert_eq!(splitext(&POSIX, "a.d/b").into_pair(), ("a.d/b", ""));
/// assert_eq!(splitext(&WINDOWS, "a.d\\b").into_pair(), ("a.d\\b", ""));
/// ```
#[must_use]
pub fn splitext<'a>(syntax: &Syntax, path: &'a str) -> RootExt<'a> {
    let name_start = syntax.last_sep(path).map_or(0, |i| i + 1);

    if let Some(dot) = rfind(path, ".") {
        if dot >= name_start && !lstrip(&path[name_start..dot], ".").is_empty() {
            let (root, ext) = path.split_at(dot);
            return RootExt { root, ext };
        }
    }

    RootExt {
        root: path,
        ext: "",
    }
}

/// The final segment of a path: the tail of [`split`].
///
/// # Examples
///
/// ```
/// use pathops::path::decompose::basename;
/// use pathops::path::syntax::POSIX;
///
/// assert_eq!(basename(&POSIX, "/foo/bar"), "bar");
/// assert_eq!(basename(&POSIX, "/foo/bar/"), "");
/// ```
#[must_use]
pub fn basename<'a>(syntax: &Syntax, path: &'a str) -> &'a str {
    split(syntax, path).tail
}

/// Everything before the final segment: the head of [`split`].
///
/// # Examples
///
/// ```
/// use pathops::path::decompose::dirname;
/// use pathops::path::syntax::WINDOWS;
///
/// assert_eq!(dirname(&WINDOWS, "c:\\foo\\bar"), "c:\\foo");
/// assert_eq!(dirname(&WINDOWS, "bar"), "");
/// ```
#[must_use]
pub fn dirname<'a>(syntax: &Syntax, path: &'a str) -> &'a str {
    split(syntax, path).head
}
