//! Property-based tests for the path algebra.
//!
//! Arbitrary strings are used for the partition laws. Normalization and
//! composition laws use a small alphabet of separators, dot segments and
//! short names. The wide-alphabet tests at the end admit `:` anywhere under
//! Posix, and under Windows only as a drive marker, since a `:` deeper in a
//! Windows path can become a drive after normalization.

use super::syntax::{POSIX, WINDOWS};
use super::{decompose, join, normalize, query};
use proptest::prelude::*;

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        Just("\\".to_string()),
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z]{1,3}",
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(Just("c:")),
        prop::collection::vec(token_strategy(), 0..10),
    )
        .prop_map(|(drive, tokens)| format!("{}{}", drive.unwrap_or(""), tokens.concat()))
}

// Any mix of names, dots, colons and both separators
fn wide_strategy() -> impl Strategy<Value = String> {
    "[a:./\\\\]{0,10}"
}

// Colons only as a drive marker at byte 1
fn wide_windows_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of("[a./\\\\]"),
        "[a./\\\\]{0,9}",
    )
        .prop_map(|(drive, rest)| match drive {
            Some(letter) => format!("{letter}:{rest}"),
            None => rest,
        })
}

fn relative_strategy() -> impl Strategy<Value = String> {
    "[a-z./]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Posix never sees a drive
    #[test]
    fn posix_splitdrive_is_identity(path in ".*") {
        let parts = decompose::splitdrive(&POSIX, &path);
        prop_assert_eq!(parts.drive, "");
        prop_assert_eq!(parts.rest, path.as_str());
    }

    // drive + rest == path
    #[test]
    fn windows_splitdrive_concatenates(path in ".*") {
        let parts = decompose::splitdrive(&WINDOWS, &path);
        prop_assert_eq!(format!("{}{}", parts.drive, parts.rest), path);
    }

    // root + ext == path
    #[test]
    fn splitext_concatenates(path in ".*") {
        for syntax in [&POSIX, &WINDOWS] {
            let parts = decompose::splitext(syntax, &path);
            prop_assert_eq!(format!("{}{}", parts.root, parts.ext), path.clone());
        }
    }

    // The extension never contains a separator
    #[test]
    fn splitext_stays_in_final_segment(path in path_strategy()) {
        for syntax in [&POSIX, &WINDOWS] {
            let ext = decompose::splitext(syntax, &path).ext;
            prop_assert!(syntax.last_sep(ext).is_none());
        }
    }

    #[test]
    fn normpath_idempotent(path in path_strategy()) {
        for syntax in [&POSIX, &WINDOWS] {
            let once = normalize::normpath(syntax, &path);
            let twice = normalize::normpath(syntax, &once);
            prop_assert_eq!(twice, once);
        }
    }

    #[test]
    fn normpath_never_empty(path in path_strategy()) {
        prop_assert!(!normalize::normpath(&POSIX, &path).is_empty());
        prop_assert!(!normalize::normpath(&WINDOWS, &path).is_empty());
    }

    // Normalization keeps absoluteness
    #[test]
    fn normpath_preserves_isabs(path in path_strategy()) {
        for syntax in [&POSIX, &WINDOWS] {
            let normalized = normalize::normpath(syntax, &path);
            prop_assert_eq!(query::isabs(syntax, &normalized), query::isabs(syntax, &path));
        }
    }

    // Rejoining head and tail denotes the same location
    #[test]
    fn split_then_join_denotes_same_path(path in path_strategy()) {
        for syntax in [&POSIX, &WINDOWS] {
            let parts = decompose::split(syntax, &path);
            let rejoined = join::join(syntax, [parts.head, parts.tail]);
            prop_assert_eq!(
                normalize::normpath(syntax, &rejoined),
                normalize::normpath(syntax, &path)
            );
        }
    }

    // The tail never contains a separator
    #[test]
    fn split_tail_has_no_separator(path in path_strategy()) {
        for syntax in [&POSIX, &WINDOWS] {
            let tail = decompose::split(syntax, &path).tail;
            prop_assert!(syntax.last_sep(tail).is_none());
        }
    }

    // Joining onto an absolute path stays absolute
    #[test]
    fn join_onto_absolute_is_absolute(
        base in "/[a-z]{1,5}(/[a-z]{1,5}){0,3}",
        rest in relative_strategy(),
    ) {
        prop_assert!(query::isabs(&POSIX, &join::join(&POSIX, [base.as_str(), rest.as_str()])));
        prop_assert!(query::isabs(&WINDOWS, &join::join(&WINDOWS, [base.as_str(), rest.as_str()])));
    }

    // abspath always yields an absolute, normalized path for an absolute cwd
    #[test]
    fn abspath_is_absolute_and_normal(path in path_strategy()) {
        let posix = query::abspath(&POSIX, &path, "/work");
        prop_assert!(query::isabs(&POSIX, &posix));
        prop_assert_eq!(normalize::normpath(&POSIX, &posix), posix.clone());
    }

    #[test]
    fn posix_laws_hold_with_colons(path in wide_strategy()) {
        let once = normalize::normpath(&POSIX, &path);
        prop_assert_eq!(normalize::normpath(&POSIX, &once), once.clone());

        let parts = decompose::split(&POSIX, &path);
        let rejoined = join::join(&POSIX, [parts.head, parts.tail]);
        prop_assert_eq!(normalize::normpath(&POSIX, &rejoined), once);
    }

    #[test]
    fn windows_laws_hold_with_drive_marker_only(path in wide_windows_strategy()) {
        let once = normalize::normpath(&WINDOWS, &path);
        prop_assert_eq!(normalize::normpath(&WINDOWS, &once), once.clone());

        let parts = decompose::split(&WINDOWS, &path);
        let rejoined = join::join(&WINDOWS, [parts.head, parts.tail]);
        prop_assert_eq!(normalize::normpath(&WINDOWS, &rejoined), once);
    }

    #[test]
    fn join_onto_absolute_is_absolute_with_colons(
        base in "[/\\\\][a-z]{0,5}",
        rest in wide_strategy(),
    ) {
        prop_assert!(query::isabs(&POSIX, &join::join(&POSIX, ["/", rest.as_str()])));

        let joined = join::join(&WINDOWS, [base.as_str(), rest.as_str()]);
        // a result with ':' at byte 1 reads as a drive
        prop_assume!(textops::slice(&joined, 1, 2) != ":");
        prop_assert!(query::isabs(&WINDOWS, &joined));
    }
}
