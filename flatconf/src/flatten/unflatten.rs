//! Rebuild a nested document from flat entries.

use serde_json::{Map, Value as JsonValue};

use crate::FlatStore;
use crate::key::SEPARATOR;

impl FlatStore {
    /// Rebuild the nested document the store was flattened from.
    ///
    /// Objects whose keys are exactly `0..n` become arrays. Leaves keep their
    /// stored type. When a key is both a leaf and a parent (`a = 1` alongside
    /// `a.b = 2`), the nested entries win.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatconf::{FlatStore, FlatValue};
    /// use serde_json::json;
    ///
    /// let store: FlatStore = [
    ///     ("list.0", FlatValue::from("a")),
    ///     ("list.1", FlatValue::from("b")),
    ///     ("port", FlatValue::Integer(80)),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(store.to_document(), json!({"list": ["a", "b"], "port": 80}));
    /// ```
    #[must_use]
    pub fn to_document(&self) -> JsonValue {
        let mut root = JsonValue::Object(Map::new());
        for (key, value) in self.iter() {
            insert_path(&mut root, key.split(SEPARATOR), value.to_json());
        }
        arrays_from_indices(root)
    }
}

fn insert_path<'a>(node: &mut JsonValue, mut segments: impl Iterator<Item = &'a str>, leaf: JsonValue) {
    let Some(segment) = segments.next() else {
        if !node.is_object() {
            *node = leaf;
        }
        return;
    };
    if !node.is_object() {
        *node = JsonValue::Object(Map::new());
    }
    if let JsonValue::Object(map) = node {
        let child = map.entry(segment).or_insert(JsonValue::Null);
        insert_path(child, segments, leaf);
    }
}

fn arrays_from_indices(node: JsonValue) -> JsonValue {
    let JsonValue::Object(map) = node else {
        return node;
    };
    let is_list = !map.is_empty()
        && (0..map.len()).all(|index| map.contains_key(&index.to_string()));
    if is_list {
        let mut slots: Vec<(usize, JsonValue)> = map
            .into_iter()
            .filter_map(|(k, v)| k.parse::<usize>().ok().map(|i| (i, arrays_from_indices(v))))
            .collect();
        slots.sort_by_key(|(index, _)| *index);
        JsonValue::Array(slots.into_iter().map(|(_, v)| v).collect())
    } else {
        JsonValue::Object(
            map.into_iter()
                .map(|(k, v)| (k, arrays_from_indices(v)))
                .collect(),
        )
    }
}
