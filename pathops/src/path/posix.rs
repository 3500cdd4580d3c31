//! POSIX-locked path operations.
//!
//! These behave identically on every build target: `/` is the only
//! separator, there are no drives, and exactly two leading slashes survive
//! normalization.
//!
//! # Examples
//!
//! ```
//! use pathops::path::posix;
//!
//! assert_eq!(posix::join(["/usr", "lib"]), "/usr/lib");
//! assert_eq!(posix::normpath("//a/./b/.."), "//a");
//! assert!(!posix::isabs("c:\\dir"));
//! ```

use super::syntax::POSIX;
use super::{decompose, join as compose, normalize, query};
use super::{DriveSplit, HeadTail, RootExt};

/// Always an empty drive and the whole path.
#[must_use]
pub fn splitdrive(path: &str) -> DriveSplit<'_> {
    decompose::splitdrive(&POSIX, path)
}

/// Whether the path starts with `/`.
#[must_use]
pub fn isabs(path: &str) -> bool {
    query::isabs(&POSIX, path)
}

/// Join components with `/`.
pub fn join<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    compose::join(&POSIX, components)
}

/// Split before the final segment.
#[must_use]
pub fn split(path: &str) -> HeadTail<'_> {
    decompose::split(&POSIX, path)
}

/// Split before the extension.
#[must_use]
pub fn splitext(path: &str) -> RootExt<'_> {
    decompose::splitext(&POSIX, path)
}

/// The final segment.
#[must_use]
pub fn basename(path: &str) -> &str {
    decompose::basename(&POSIX, path)
}

/// Everything before the final segment.
#[must_use]
pub fn dirname(path: &str) -> &str {
    decompose::dirname(&POSIX, path)
}

/// Normalize.
#[must_use]
pub fn normpath(path: &str) -> String {
    normalize::normpath(&POSIX, path)
}

/// Absolutize against `cwd`.
#[must_use]
pub fn abspath(path: &str, cwd: &str) -> String {
    query::abspath(&POSIX, path, cwd)
}
