//! Conversion between nested documents and the flat key space.
//!
//! Objects contribute their keys as path segments and arrays contribute the
//! element index, so `{"list": [{"name": "a"}]}` flattens to
//! `list.0.name = "a"`. Empty containers and `null` leaves produce no entry.

mod shape;
mod structs;
mod unflatten;

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::{FlatValue, key};

pub use structs::{StructSource, flatten_struct};

/// Flatten a parsed document into `path -> leaf` entries.
///
/// Keys keep the case they had in the document; [`crate::FlatStore`]
/// canonicalises them on insertion.
///
/// # Examples
///
/// ```
/// use flatconf::{FlatValue, flatten};
/// use serde_json::json;
///
/// let flat = flatten(&json!({"general": {"list": [1, {"name": "x"}]}, "top": "level"}));
/// assert_eq!(flat.get("general.list.0"), Some(&FlatValue::Integer(1)));
/// assert_eq!(flat.get("general.list.1.name"), Some(&FlatValue::from("x")));
/// assert_eq!(flat.get("top"), Some(&FlatValue::from("level")));
/// ```
#[must_use]
pub fn flatten(document: &JsonValue) -> BTreeMap<String, FlatValue> {
    let mut out = BTreeMap::new();
    flatten_into("", document, &mut out);
    out
}

fn flatten_into(path: &str, node: &JsonValue, out: &mut BTreeMap<String, FlatValue>) {
    match node {
        JsonValue::Object(map) => {
            for (name, child) in map {
                flatten_into(&key::join(path, name), child, out);
            }
        }
        JsonValue::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(&key::join_index(path, index), child, out);
            }
        }
        scalar => {
            if let Some(value) = FlatValue::from_json(scalar) {
                out.insert(path.to_owned(), value);
            }
        }
    }
}
