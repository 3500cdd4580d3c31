//! Property-based tests for the string primitives.

use crate::{find_in, join, rfind_in, slice, split, starts_with, strip, END};
use proptest::prelude::*;

fn index_strategy() -> impl Strategy<Value = isize> {
    prop_oneof![-12isize..12, Just(END), Just(isize::MIN + 1)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Slicing never panics, even on multi-byte input
    #[test]
    fn slice_is_total(s in "\\PC{0,10}", start in index_strategy(), end in index_strategy()) {
        let piece = slice(&s, start, end);
        prop_assert!(s.contains(piece));
    }

    // A found offset is a char boundary that points at the needle
    #[test]
    fn find_points_at_needle(
        s in prop_oneof!["[ab/]{0,12}", "\\PC{0,8}"],
        sub in prop_oneof!["[ab/]{0,2}", "\\PC{0,1}"],
        start in index_strategy(),
        end in index_strategy(),
    ) {
        if let Some(i) = find_in(&s, &sub, start, end) {
            prop_assert!(s.is_char_boundary(i));
            prop_assert!(starts_with(&s[i..], &sub));
        }
        if let Some(i) = rfind_in(&s, &sub, start, end) {
            prop_assert!(s.is_char_boundary(i));
            prop_assert!(starts_with(&s[i..], &sub));
        }
    }

    // rfind never reports an offset below find
    #[test]
    fn rfind_not_before_find(s in "[ab/]{0,12}", sub in "[ab/]{1,2}") {
        let first = find_in(&s, &sub, 0, END);
        let last = rfind_in(&s, &sub, 0, END);
        prop_assert_eq!(first.is_some(), last.is_some());
        if let (Some(f), Some(l)) = (first, last) {
            prop_assert!(f <= l);
        }
    }

    // Joining split fields with the same separator reproduces the input
    #[test]
    fn split_join_round_trip(s in "[ab/]{0,16}", sep in "/|//|ab") {
        prop_assert_eq!(join(&sep, split(&s, &sep, None)), s);
    }

    // Stripping twice changes nothing
    #[test]
    fn strip_idempotent(s in "[ ./a]{0,12}", chars in "[ ./]{0,2}") {
        let once = strip(&s, &chars);
        prop_assert_eq!(strip(once, &chars), once);
    }
}
