//! Splitting on a literal delimiter and joining with one.

use crate::strip::is_space;

/// Split `s` on every occurrence of `sep`.
///
/// With `maxsplit` set, at most that many splits are made and the remainder
/// is returned as the last field. An empty `sep` splits on runs of
/// whitespace instead and never yields empty fields.
///
/// # Examples
///
/// ```
/// use textops::split;
///
/// assert_eq!(split("a/b/c", "/", None), vec!["a", "b", "c"]);
/// assert_eq!(split("a/b/c", "/", Some(1)), vec!["a", "b/c"]);
/// assert_eq!(split("/a/", "/", None), vec!["", "a", ""]);
/// assert_eq!(split("", "/", None), vec![""]);
/// assert_eq!(split("  one  two ", "", None), vec!["one", "two"]);
/// ```
#[must_use]
pub fn split<'a>(s: &'a str, sep: &str, maxsplit: Option<usize>) -> Vec<&'a str> {
    if sep.is_empty() {
        return split_whitespace(s, maxsplit);
    }
    match maxsplit {
        Some(n) => s.splitn(n.saturating_add(1), sep).collect(),
        None => s.split(sep).collect(),
    }
}

fn split_whitespace(s: &str, maxsplit: Option<usize>) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut remaining = maxsplit;
    let mut rest = s.trim_start_matches(is_space);

    while !rest.is_empty() {
        if remaining == Some(0) {
            // the remainder keeps its trailing whitespace
            fields.push(rest);
            break;
        }
        let end = rest.find(is_space).unwrap_or(rest.len());
        fields.push(&rest[..end]);
        rest = rest[end..].trim_start_matches(is_space);
        remaining = remaining.map(|n| n - 1);
    }

    fields
}

/// Concatenate `items`, placing `sep` between each adjacent pair.
///
/// # Examples
///
/// ```
/// use textops::join;
///
/// assert_eq!(join("/", ["a", "b", "c"]), "a/b/c");
/// assert_eq!(join("\\", Vec::<String>::new()), "");
/// assert_eq!(join(", ", ["only"]), "only");
/// ```
pub fn join<I, S>(sep: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(sep);
        }
        joined.push_str(item.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_consecutive_separators() {
        assert_eq!(split("a//b", "/", None), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_multichar_separator() {
        assert_eq!(split("a::b::c", "::", None), vec!["a", "b", "c"]);
        assert_eq!(split("a:::b", "::", None), vec!["a", ":b"]);
    }

    #[test]
    fn test_split_maxsplit_zero() {
        assert_eq!(split("a/b", "/", Some(0)), vec!["a/b"]);
    }

    #[test]
    fn test_split_maxsplit_huge() {
        assert_eq!(split("a/b", "/", Some(usize::MAX)), vec!["a", "b"]);
    }

    #[test]
    fn test_split_whitespace_maxsplit() {
        assert_eq!(split("  a b  c  ", "", Some(1)), vec!["a", "b  c  "]);
        assert_eq!(split("a b ", "", Some(1)), vec!["a", "b "]);
        assert_eq!(split(" a b ", "", Some(0)), vec!["a b "]);
    }

    #[test]
    fn test_split_whitespace_empty() {
        assert!(split("", "", None).is_empty());
        assert!(split(" \t\n", "", None).is_empty());
    }

    #[test]
    fn test_join_round_trip() {
        let s = "/x//y/";
        assert_eq!(join("/", split(s, "/", None)), s);
    }

    #[test]
    fn test_join_owned_items() {
        let parts = vec![String::from("a"), String::from("b")];
        assert_eq!(join("\\", &parts), "a\\b");
    }
}
