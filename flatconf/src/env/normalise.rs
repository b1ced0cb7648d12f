//! Environment variable name normalisation.

use crate::key::{self, SEPARATOR};

/// Convert an (already prefix-stripped) variable name into a flat key.
///
/// The name is lowercased and split on `_`; all-digit segments become
/// canonical list indices. Runs of underscores collapse into one separator
/// (`A__B` maps to `a.b`, never `a..b`), because an empty segment cannot
/// address any field. Returns `None` when nothing remains.
///
/// # Examples
///
/// ```
/// use flatconf::env_key;
///
/// assert_eq!(env_key("NESTED_CHILD_RENAMED").as_deref(), Some("nested.child.renamed"));
/// assert_eq!(env_key("LISTSTRING_0").as_deref(), Some("liststring.0"));
/// assert_eq!(env_key("USERS_01_NAME").as_deref(), Some("users.1.name"));
/// assert_eq!(env_key("__"), None);
/// ```
#[must_use]
pub fn env_key(name: &str) -> Option<String> {
    let segments: Vec<String> = name
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| key::index_segment(segment).unwrap_or_else(|| key::canonical(segment)))
        .collect();
    (!segments.is_empty()).then(|| segments.join(&SEPARATOR.to_string()))
}
