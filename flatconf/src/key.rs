//! Canonical flat-key construction.
//!
//! A flat key is a sequence of lowercase segments joined by `.`. Segments are
//! either field or map-key names, or non-negative integers addressing list
//! positions.

/// Separator between flat-key segments.
pub const SEPARATOR: char = '.';

/// Canonical (lowercased) form of a key or segment.
///
/// # Examples
///
/// ```
/// assert_eq!(flatconf::key::canonical("Nested.Child.floatNum"), "nested.child.floatnum");
/// ```
#[must_use]
pub fn canonical(key: &str) -> String {
    key.to_lowercase()
}

/// Append `segment` to `parent`, omitting the separator at the root.
///
/// # Examples
///
/// ```
/// use flatconf::key::join;
/// assert_eq!(join("", "top"), "top");
/// assert_eq!(join("list", "0"), "list.0");
/// ```
#[must_use]
pub fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_owned()
    } else {
        format!("{parent}{SEPARATOR}{segment}")
    }
}

/// Append a list index to `parent`.
#[must_use]
pub fn join_index(parent: &str, index: usize) -> String {
    join(parent, &index.to_string())
}

/// Render an all-digit segment as a canonical list index.
///
/// Leading zeros are dropped so `01` and `1` address the same slot. Returns
/// `None` for segments that are not plain non-negative integers.
#[must_use]
pub fn index_segment(segment: &str) -> Option<String> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<usize>().ok().map(|index| index.to_string())
}

/// Returns `true` when `candidate` is `prefix` itself or lies beneath it.
#[must_use]
pub(crate) fn is_at_or_under(candidate: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    candidate
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Some("0"))]
    #[case("007", Some("7"))]
    #[case("12", Some("12"))]
    #[case("", None)]
    #[case("1a", None)]
    #[case("-1", None)]
    fn renders_index_segments(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(index_segment(raw).as_deref(), expected);
    }

    #[rstest]
    #[case("list.1", "list.1", true)]
    #[case("list.1.name", "list.1", true)]
    #[case("list.10", "list.1", false)]
    #[case("lists", "list", false)]
    #[case("anything", "", true)]
    fn detects_nested_keys(#[case] candidate: &str, #[case] prefix: &str, #[case] expected: bool) {
        assert_eq!(is_at_or_under(candidate, prefix), expected);
    }
}
