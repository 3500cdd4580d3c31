//! Pure string path algebra.
//!
//! Paths here are plain strings with no filesystem behind them: nothing is
//! checked for existence, no symlink is followed, and no environment is
//! read. Every operation is total and returns a value for any input,
//! including the empty string.
//!
//! # Three Forms
//!
//! Each operation comes in three forms:
//!
//! - the functions in this module, which use the syntax of the build target
//!   ([`Regime::NATIVE`](crate::Regime::NATIVE));
//! - the functions in [`posix`], locked to POSIX syntax on every target;
//! - the functions in [`windows`], locked to Windows syntax on every target.
//!
//! The same operations are methods on [`Regime`](crate::Regime) for callers
//! that pick the syntax at runtime.
//!
//! # Invariants
//!
//! - `splitdrive`: `drive + rest` is the original path.
//! - `splitext`: `root + ext` is the original path.
//! - `split`: joining `head` and `tail` denotes the original location.
//! - `normpath` is idempotent and never returns the empty string.
//! - `join` onto an absolute path gives an absolute path.
//!
//! Under Windows syntax any character followed by `:` at the start of a
//! path is a drive. The last three invariants hold for Windows paths whose
//! only `:` is that drive marker. A `:` deeper in the path can be moved to
//! the second byte by normalization or joining and is then read as a drive:
//! `normpath(".\\a:.")` is `a:.`, which normalizes again to `a:`, and
//! `join("/", ":")` is the relative `/:`.
//!
//! # Examples
//!
//! ```
//! use pathops::path::{posix, windows};
//!
//! assert_eq!(posix::normpath("a//b/./c/../d"), "a/b/d");
//! assert_eq!(windows::normpath("a//b/./c/../d"), "a\\b\\d");
//!
//! assert_eq!(posix::split("/a/b/").into_pair(), ("/a/b", ""));
//! assert_eq!(windows::join(["c:", "/a"]), "c:/a");
//! assert_eq!(posix::splitext(".cshrc").into_pair(), (".cshrc", ""));
//! ```

pub mod decompose;
pub mod join;
pub mod normalize;
pub mod posix;
pub mod query;
pub mod syntax;
mod types;
pub mod windows;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use syntax::{LeadingSeparators, Syntax};
pub use types::{DriveSplit, HeadTail, RootExt};

use crate::regime::Regime;

/// Split off a drive specification using the build target's syntax.
#[must_use]
pub fn splitdrive(path: &str) -> DriveSplit<'_> {
    Regime::NATIVE.splitdrive(path)
}

/// Test absoluteness using the build target's syntax.
#[must_use]
pub fn isabs(path: &str) -> bool {
    Regime::NATIVE.isabs(path)
}

/// Join components using the build target's syntax.
pub fn join<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Regime::NATIVE.join(components)
}

/// Split before the final segment using the build target's syntax.
#[must_use]
pub fn split(path: &str) -> HeadTail<'_> {
    Regime::NATIVE.split(path)
}

/// Split before the extension using the build target's syntax.
#[must_use]
pub fn splitext(path: &str) -> RootExt<'_> {
    Regime::NATIVE.splitext(path)
}

/// The final segment using the build target's syntax.
#[must_use]
pub fn basename(path: &str) -> &str {
    Regime::NATIVE.basename(path)
}

/// Everything before the final segment using the build target's syntax.
#[must_use]
pub fn dirname(path: &str) -> &str {
    Regime::NATIVE.dirname(path)
}

/// Normalize using the build target's syntax.
#[must_use]
pub fn normpath(path: &str) -> String {
    Regime::NATIVE.normpath(path)
}

/// Absolutize against `cwd` using the build target's syntax.
#[must_use]
pub fn abspath(path: &str, cwd: &str) -> String {
    Regime::NATIVE.abspath(path, cwd)
}
