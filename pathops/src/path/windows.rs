//! Windows-locked path operations.
//!
//! `\` is the primary separator and `/` is accepted wherever a separator is
//! expected. A drive is any single character followed by `:`. Results are
//! the same on every build target.
//!
//! # Examples
//!
//! ```
//! use pathops::path::windows;
//!
//! assert_eq!(windows::splitdrive("c:\\dir").into_pair(), ("c:", "\\dir"));
//! assert_eq!(windows::normpath("c:/a/../b"), "c:\\b");
//! assert!(!windows::isabs("c:dir"));
//! ```

use super::syntax::WINDOWS;
use super::{decompose, join as compose, normalize, query};
use super::{DriveSplit, HeadTail, RootExt};

/// Split off a leading `X:`.
#[must_use]
pub fn splitdrive(path: &str) -> DriveSplit<'_> {
    decompose::splitdrive(&WINDOWS, path)
}

/// Whether the path starts with a separator after any drive.
#[must_use]
pub fn isabs(path: &str) -> bool {
    query::isabs(&WINDOWS, path)
}

/// Join components with `\`, keeping a bare drive for absolute components.
pub fn join<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    compose::join(&WINDOWS, components)
}

/// Split before the final segment.
#[must_use]
pub fn split(path: &str) -> HeadTail<'_> {
    decompose::split(&WINDOWS, path)
}

/// Split before the extension.
#[must_use]
pub fn splitext(path: &str) -> RootExt<'_> {
    decompose::splitext(&WINDOWS, path)
}

/// The final segment.
#[must_use]
pub fn basename(path: &str) -> &str {
    decompose::basename(&WINDOWS, path)
}

/// Everything before the final segment, drive included.
#[must_use]
pub fn dirname(path: &str) -> &str {
    decompose::dirname(&WINDOWS, path)
}

/// Normalize, converting every `/` to `\`.
#[must_use]
pub fn normpath(path: &str) -> String {
    normalize::normpath(&WINDOWS, path)
}

/// Absolutize against `cwd`.
#[must_use]
pub fn abspath(path: &str, cwd: &str) -> String {
    query::abspath(&WINDOWS, path, cwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_scenarios() {
        assert_eq!(splitdrive("c:\\foo\\bar").into_pair(), ("c:", "\\foo\\bar"));
        assert_eq!(splitdrive("c:/foo/bar").into_pair(), ("c:", "/foo/bar"));
        assert_eq!(splitdrive("foo").into_pair(), ("", "foo"));
        assert_eq!(normpath("A//B/./C/../D"), "A\\B\\D");
        assert_eq!(join(["c:", "/a"]), "c:/a");
        assert_eq!(join(["c:/a", "/b"]), "/b");
        assert!(!isabs("c:"));
        assert!(isabs("c:\\"));
    }

    #[test]
    fn test_windows_split() {
        assert_eq!(split("c:\\foo\\bar").into_pair(), ("c:\\foo", "bar"));
        assert_eq!(split("c:\\").into_pair(), ("c:\\", ""));
        assert_eq!(split("c:").into_pair(), ("c:", ""));
        assert_eq!(split("c:/x//").into_pair(), ("c:/x", ""));
    }

    #[test]
    fn test_windows_splitext_ignores_dots_in_directories() {
        assert_eq!(splitext("c:\\a.b\\c").into_pair(), ("c:\\a.b\\c", ""));
        assert_eq!(splitext("c:/a.b/c.d").into_pair(), ("c:/a.b/c", ".d"));
    }

    #[test]
    fn test_windows_basename_dirname() {
        assert_eq!(basename("c:\\dir\\file.txt"), "file.txt");
        assert_eq!(dirname("c:\\dir\\file.txt"), "c:\\dir");
        assert_eq!(basename("c:file"), "file");
        assert_eq!(dirname("c:file"), "c:");
    }

    #[test]
    fn test_windows_abspath() {
        assert_eq!(abspath("..\\x", "c:\\work\\sub"), "c:\\work\\x");
        assert_eq!(abspath("d:\\y", "c:\\work"), "d:\\y");
    }
}
