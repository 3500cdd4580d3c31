//! Absoluteness and absolutization.

use super::decompose::splitdrive;
use super::join::join;
use super::normalize::normpath;
use super::syntax::Syntax;

/// Test whether a path is absolute.
///
/// A path is absolute when, after any drive, it starts with a separator.
/// A drive alone (`c:`) or a drive followed by a relative path (`c:foo`) is
/// relative to that drive's current directory and so is not absolute.
///
/// # Examples
///
/// ```
/// use pathops::path::query::isabs;
/// use pathops::path::syntax::{POSIX, WINDOWS};
///
/// assert!(isabs(&POSIX, "/etc"));
/// assert!(!isabs(&POSIX, "\\etc"));
/// assert!(isabs(&WINDOWS, "c:\\"));
/// assert!(isabs(&WINDOWS, "/x"));
/// assert!(!isabs(&WINDOWS, "c:"));
/// ```
#[must_use]
pub fn isabs(syntax: &Syntax, path: &str) -> bool {
    syntax.starts_with_sep(splitdrive(syntax, path).rest)
}

/// Make a path absolute against `cwd`, then normalize it.
///
/// `cwd` is supplied by the caller; nothing here reads the process
/// environment. An already absolute `path` ignores `cwd`.
///
/// # Examples
///
/// ```
/// use pathops::path::query::abspath;
/// use pathops::path::syntax::{POSIX, WINDOWS};
///
/// assert_eq!(abspath(&POSIX, "../lib", "/usr/bin"), "/usr/lib");
/// assert_eq!(abspath(&POSIX, "/tmp/./x", "/ignored"), "/tmp/x");
/// assert_eq!(abspath(&WINDOWS, "a/b", "c:\\work"), "c:\\work\\a\\b");
/// ```
#[must_use]
pub fn abspath(syntax: &Syntax, path: &str, cwd: &str) -> String {
    if isabs(syntax, path) {
        normpath(syntax, path)
    } else {
        normpath(syntax, &join(syntax, [cwd, path]))
    }
}
