//! Path composition.
//!
//! Components are folded left to right into an accumulator. An absolute
//! component normally throws the accumulator away; under a regime with
//! drives, a bare drive reference such as `c:` or `c:\` instead keeps its
//! drive and receives the absolute component.

use textops::slice_from;

use super::decompose::splitdrive;
use super::query::isabs;
use super::syntax::Syntax;

/// Join path components, inserting separators where needed.
///
/// Zero components give the empty string and a single component is returned
/// unchanged. An empty component after a non-empty accumulator appends a
/// trailing separator.
///
/// # Examples
///
/// ```
/// use pathops::path::join::join;
/// use pathops::path::syntax::{POSIX, WINDOWS};
///
/// assert_eq!(join(&POSIX, ["/usr", "lib", "x.so"]), "/usr/lib/x.so");
/// assert_eq!(join(&POSIX, ["a/", "/b"]), "/b");
/// assert_eq!(join(&POSIX, ["a", ""]), "a/");
///
/// assert_eq!(join(&WINDOWS, ["c:", "foo"]), "c:foo");
/// assert_eq!(join(&WINDOWS, ["c:", "/a"]), "c:/a");
/// assert_eq!(join(&WINDOWS, ["c:/a", "/b"]), "/b");
/// ```
pub fn join<I, S>(syntax: &Syntax, components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut components = components.into_iter();
    let Some(first) = components.next() else {
        return String::new();
    };
    let mut path = first.as_ref().to_owned();

    for component in components {
        let b = component.as_ref();

        if resets(syntax, &path, b) {
            if !path.is_empty() {
                log::trace!("absolute component {b:?} replaces {path:?}");
            }
            path.clear();
            path.push_str(b);
        } else if syntax.ends_with_sep(&path) {
            if syntax.starts_with_sep(b) {
                path.push_str(slice_from(b, 1));
            } else {
                path.push_str(b);
            }
        } else if syntax.ends_with_drive_marker(&path) {
            // drive-relative, e.g. c:foo
            path.push_str(b);
        } else if syntax.starts_with_sep(b) {
            path.push_str(b);
        } else {
            path.push_str(syntax.sep);
            path.push_str(b);
        }
    }

    path
}

/// Whether component `b` replaces the accumulated `path` outright.
fn resets(syntax: &Syntax, path: &str, b: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    isabs(syntax, b) && !is_bare_drive_target(syntax, path, b)
}

/// `path` is only a drive (`c:`, `c:\`, `c:/`) and `b` names no drive of its
/// own, so `b` lands on that drive.
fn is_bare_drive_target(syntax: &Syntax, path: &str, b: &str) -> bool {
    if !splitdrive(syntax, path).has_drive() || splitdrive(syntax, b).has_drive() {
        return false;
    }
    path.len() == 2 || (path.len() == 3 && syntax.ends_with_sep(path))
}
