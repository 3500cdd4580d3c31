//! Path normalization.
//!
//! Normalization collapses separator runs, drops `.` segments and resolves
//! `..` against the segment before it. It works on the string alone and
//! never consults a filesystem, so it can change the meaning of a path that
//! passes through a symbolic link.

use std::borrow::Cow;

use textops::{join, lstrip, replace, split};

use super::decompose::splitdrive;
use super::syntax::{LeadingSeparators, Syntax};
use super::types::DriveSplit;

const CURRENT: &str = ".";
const PARENT: &str = "..";

/// Normalize a path.
///
/// - Alternate separators become the primary separator.
/// - Leading separators follow the regime's [`LeadingSeparators`] rule.
/// - Empty and `.` segments are removed.
/// - `..` removes the segment before it. A `..` with nothing before it is
///   dropped when the path is rooted and kept when it is relative; a `..`
///   following another kept `..` is kept.
/// - A path that normalizes to nothing becomes `.`.
///
/// # Examples
///
/// ```
/// use pathops::path::normalize::normpath;
/// use pathops::path::syntax::{POSIX, WINDOWS};
///
/// assert_eq!(normpath(&POSIX, "a//b/./c/../d"), "a/b/d");
/// assert_eq!(normpath(&POSIX, "//x"), "//x");
/// assert_eq!(normpath(&POSIX, "///x"), "/x");
/// assert_eq!(normpath(&POSIX, ""), ".");
///
/// assert_eq!(normpath(&WINDOWS, "C:///A//B"), "C:\\A\\B");
/// assert_eq!(normpath(&WINDOWS, "//machine/share//a/b"), "\\\\machine\\share\\a\\b");
/// ```
#[must_use]
pub fn normpath(syntax: &Syntax, path: &str) -> String {
    let path: Cow<'_, str> = match syntax.altsep {
        Some(alt) => Cow::Owned(replace(path, alt, syntax.sep, None)),
        None => Cow::Borrowed(path),
    };
    let DriveSplit { drive, rest } = splitdrive(syntax, &path);

    let body = lstrip(rest, syntax.sep);
    let run = rest.len() - body.len();
    let kept = match syntax.leading {
        LeadingSeparators::AllowDouble if run == 2 => 2,
        LeadingSeparators::AllowDouble => run.min(1),
        LeadingSeparators::PreserveWithoutDrive if drive.is_empty() => run,
        LeadingSeparators::PreserveWithoutDrive => run.min(1),
    };
    let rooted = kept > 0;

    let mut normalized = String::with_capacity(path.len());
    normalized.push_str(drive);
    normalized.push_str(&rest[..kept]);

    let mut segments: Vec<&str> = Vec::new();
    for segment in split(body, syntax.sep, None) {
        match segment {
            "" | CURRENT => {}
            PARENT => match segments.last() {
                Some(&last) if last != PARENT => {
                    segments.pop();
                }
                // nothing above the root
                None if rooted => {}
                _ => segments.push(segment),
            },
            _ => segments.push(segment),
        }
    }

    if normalized.is_empty() && segments.is_empty() {
        return CURRENT.to_owned();
    }
    normalized.push_str(&join(syntax.sep, segments));
    normalized
}
